use super::*;

use crate::state::toasts::ToastKind;

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// prepare: validation gate
// =============================================================

#[test]
fn invalid_email_never_dispatches_and_toasts_once() {
    let mut toasts = ToastState::default();
    let form = login_form("no-at-sign", "longenough");

    // Repeated attempts within the display window replace the toast
    // rather than stacking it.
    assert!(prepare_login(&form, &mut toasts).is_none());
    assert!(prepare_login(&form, &mut toasts).is_none());
    assert!(prepare_login(&form, &mut toasts).is_none());

    assert_eq!(toasts.active().len(), 1);
    assert_eq!(toasts.active()[0].id, Some("invalidEmail"));
    assert_eq!(toasts.active()[0].message, "Invalid email");
    assert_eq!(toasts.active()[0].duration_ms, 2000);
}

#[test]
fn short_password_never_dispatches() {
    let mut toasts = ToastState::default();
    let form = login_form("guest@example.com", "seven77");

    assert!(prepare_login(&form, &mut toasts).is_none());
    assert_eq!(toasts.active().len(), 1);
    assert_eq!(toasts.active()[0].id, Some("invalidPassword"));
}

#[test]
fn valid_login_form_yields_credentials_and_no_toast() {
    let mut toasts = ToastState::default();
    let form = login_form("guest@example.com", "longenough");

    let credentials = prepare_login(&form, &mut toasts).unwrap();
    assert_eq!(credentials.email, "guest@example.com");
    assert!(toasts.active().is_empty());
}

#[test]
fn register_blank_name_toasts_empty_name() {
    let mut toasts = ToastState::default();
    let form = RegisterForm {
        name: String::new(),
        email: "guest@example.com".to_owned(),
        password: "longenough".to_owned(),
    };

    assert!(prepare_register(&form, &mut toasts).is_none());
    assert_eq!(toasts.active()[0].id, Some("emptyName"));
}

// =============================================================
// begin / settle: login
// =============================================================

#[test]
fn begin_raises_the_in_flight_flag() {
    let mut in_flight = false;
    begin(&mut in_flight);
    assert!(in_flight);
}

#[test]
fn login_success_closes_modal_and_toasts_once() {
    let mut modals = ModalsState::default();
    let mut ui = UiState::default();
    let mut toasts = ToastState::default();
    let mut in_flight = true;
    modals.open(ModalKind::Login);

    settle_login(
        SignInResult::Success,
        &mut modals,
        &mut ui,
        &mut toasts,
        &mut in_flight,
    );

    assert!(!modals.is_open(ModalKind::Login));
    assert!(!in_flight);
    assert_eq!(toasts.active().len(), 1);
    assert_eq!(toasts.active()[0].kind, ToastKind::Success);
    assert_eq!(toasts.active()[0].message, "Logged in, welcome back!");
}

#[test]
fn login_success_requests_a_data_refresh() {
    let mut modals = ModalsState::default();
    let mut ui = UiState::default();
    let mut toasts = ToastState::default();
    let mut in_flight = true;

    settle_login(
        SignInResult::Success,
        &mut modals,
        &mut ui,
        &mut toasts,
        &mut in_flight,
    );

    assert_eq!(ui.data_epoch, 1);
}

#[test]
fn login_failure_surfaces_reason_and_keeps_modal_open() {
    let mut modals = ModalsState::default();
    let mut ui = UiState::default();
    let mut toasts = ToastState::default();
    let mut in_flight = true;
    modals.open(ModalKind::Login);

    settle_login(
        SignInResult::Failure("X".to_owned()),
        &mut modals,
        &mut ui,
        &mut toasts,
        &mut in_flight,
    );

    assert!(modals.is_open(ModalKind::Login));
    assert!(!in_flight);
    assert_eq!(ui.data_epoch, 0);
    assert_eq!(toasts.active().len(), 1);
    assert_eq!(toasts.active()[0].kind, ToastKind::Error);
    assert_eq!(toasts.active()[0].message, "X");
}

// =============================================================
// settle: register
// =============================================================

#[test]
fn register_success_closes_modal_without_toast() {
    let mut modals = ModalsState::default();
    let mut toasts = ToastState::default();
    let mut in_flight = true;
    modals.open(ModalKind::Register);

    settle_register(Ok(()), &mut modals, &mut toasts, &mut in_flight);

    assert!(!modals.is_open(ModalKind::Register));
    assert!(!in_flight);
    assert!(toasts.active().is_empty());
}

#[test]
fn register_failure_collapses_to_generic_toast() {
    let mut modals = ModalsState::default();
    let mut toasts = ToastState::default();
    let mut in_flight = true;
    modals.open(ModalKind::Register);

    settle_register(
        Err("connection refused".to_owned()),
        &mut modals,
        &mut toasts,
        &mut in_flight,
    );

    assert!(modals.is_open(ModalKind::Register));
    assert!(!in_flight);
    assert_eq!(toasts.active().len(), 1);
    assert_eq!(toasts.active()[0].id, Some("failedSignUp"));
    assert_eq!(toasts.active()[0].message, "Something Went Wrong");
}

#[test]
fn register_failure_always_lowers_the_flag_for_retry() {
    let mut modals = ModalsState::default();
    let mut toasts = ToastState::default();
    let mut in_flight = true;
    modals.open(ModalKind::Register);

    settle_register(Err("first".to_owned()), &mut modals, &mut toasts, &mut in_flight);
    assert!(!in_flight);

    // The modal is still open, so the user can retry the same flow.
    begin(&mut in_flight);
    settle_register(Ok(()), &mut modals, &mut toasts, &mut in_flight);
    assert!(!in_flight);
    assert!(!modals.is_open(ModalKind::Register));
}

// =============================================================
// User menu -> modal handoff
// =============================================================

#[test]
fn open_auth_modal_fires_both_effects_in_one_event() {
    let mut modals = ModalsState::default();
    let mut ui = UiState::default();
    ui.toggle_menu();
    assert!(ui.menu_open);

    open_auth_modal(ModalKind::Login, &mut modals, &mut ui);

    assert!(modals.is_open(ModalKind::Login));
    assert!(!ui.menu_open);
}

#[test]
fn open_auth_modal_handles_register_too() {
    let mut modals = ModalsState::default();
    let mut ui = UiState::default();
    ui.toggle_menu();

    open_auth_modal(ModalKind::Register, &mut modals, &mut ui);

    assert!(modals.is_open(ModalKind::Register));
    assert!(!ui.menu_open);
}
