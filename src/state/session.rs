//! Credential submission flow for the login and register modals.
//!
//! DESIGN
//! ======
//! The flow is split into pure transition functions (`prepare_*`,
//! `settle_*`) operating on `&mut` state so they run under plain unit
//! tests, and thin `spawn_*` drivers that thread the signals and the
//! async delegate calls on the browser side.
//!
//! One submission is: prepare (validate, maybe toast, maybe stop) ->
//! begin (raise the in-flight flag) -> outbound call -> settle (route the
//! outcome to the toast queue and modal store, always lowering the flag).
//! There is no retry, no timeout, and no cancellation: closing a modal
//! does not abort an in-flight call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Set, Update};

use crate::form::{LoginForm, RegisterForm};
use crate::net::types::{Credentials, RegisterPayload};
use crate::state::modals::{ModalKind, ModalsState};
use crate::state::toasts::{ToastOptions, ToastState};
use crate::state::ui::UiState;

/// Terminal outcome of the credential sign-in delegate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInResult {
    Success,
    Failure(String),
}

/// Validate the login form. On failure the lead field toast is emitted
/// (stable id, so repeats replace rather than stack) and no submission
/// is dispatched.
pub fn prepare_login(form: &LoginForm, toasts: &mut ToastState) -> Option<Credentials> {
    match form.validate() {
        Ok(credentials) => Some(credentials),
        Err(errors) => {
            notify_field_error(errors.notice(), toasts);
            None
        }
    }
}

/// Validate the register form, same contract as [`prepare_login`].
pub fn prepare_register(form: &RegisterForm, toasts: &mut ToastState) -> Option<RegisterPayload> {
    match form.validate() {
        Ok(payload) => Some(payload),
        Err(errors) => {
            notify_field_error(errors.notice(), toasts);
            None
        }
    }
}

fn notify_field_error(notice: Option<crate::form::FieldNotice>, toasts: &mut ToastState) {
    if let Some(notice) = notice {
        toasts.error_with(
            notice.message,
            ToastOptions {
                id: Some(notice.id),
                duration_ms: Some(notice.duration_ms),
            },
        );
    }
}

/// Raise the in-flight flag, strictly before the outbound call starts.
///
/// This is not a re-entry guard: the disabled flag surfaced to the UI is
/// the only thing preventing a duplicate submit, and calling into the
/// flow again while the flag is up is a caller error.
pub fn begin(in_flight: &mut bool) {
    *in_flight = true;
}

/// Route a settled sign-in outcome.
///
/// Success emits one success toast, closes the login modal, and requests
/// a page data refresh. Failure surfaces the delegate's reason verbatim
/// and leaves the modal open for retry. The in-flight flag is lowered on
/// every path.
pub fn settle_login(
    result: SignInResult,
    modals: &mut ModalsState,
    ui: &mut UiState,
    toasts: &mut ToastState,
    in_flight: &mut bool,
) {
    *in_flight = false;
    match result {
        SignInResult::Success => {
            toasts.success("Logged in, welcome back!");
            ui.request_refresh();
            modals.close(ModalKind::Login);
        }
        SignInResult::Failure(reason) => {
            toasts.error(reason);
        }
    }
}

/// Route a settled registration outcome.
///
/// Success closes the register modal with no toast. Failure collapses to
/// one generic message under a stable id; the underlying cause is only
/// logged. The in-flight flag is lowered on every path.
pub fn settle_register(
    result: Result<(), String>,
    modals: &mut ModalsState,
    toasts: &mut ToastState,
    in_flight: &mut bool,
) {
    *in_flight = false;
    match result {
        Ok(()) => modals.close(ModalKind::Register),
        Err(cause) => {
            log::warn!("registration request failed: {cause}");
            toasts.error_with(
                "Something Went Wrong",
                ToastOptions {
                    id: Some("failedSignUp"),
                    duration_ms: None,
                },
            );
        }
    }
}

/// Open an auth modal from the user menu: the modal opens and the menu
/// closes in the same event.
pub fn open_auth_modal(kind: ModalKind, modals: &mut ModalsState, ui: &mut UiState) {
    modals.open(kind);
    ui.close_menu();
}

/// Run one login submission end to end on the browser side.
#[cfg(feature = "hydrate")]
pub fn spawn_login(
    credentials: Credentials,
    modals: RwSignal<ModalsState>,
    ui: RwSignal<UiState>,
    toasts: RwSignal<ToastState>,
    in_flight: RwSignal<bool>,
) {
    in_flight.update(|flag| begin(flag));
    leptos::task::spawn_local(async move {
        let result = crate::net::api::sign_in(&credentials).await;
        let mut flight = true;
        modals.update(|m| {
            ui.update(|u| {
                toasts.update(|t| settle_login(result, m, u, t, &mut flight));
            });
        });
        in_flight.set(flight);
    });
}

/// Run one registration submission end to end on the browser side.
#[cfg(feature = "hydrate")]
pub fn spawn_register(
    payload: RegisterPayload,
    modals: RwSignal<ModalsState>,
    toasts: RwSignal<ToastState>,
    in_flight: RwSignal<bool>,
) {
    in_flight.update(|flag| begin(flag));
    leptos::task::spawn_local(async move {
        let result = crate::net::api::register(&payload).await;
        let mut flight = true;
        modals.update(|m| {
            toasts.update(|t| settle_register(result, m, t, &mut flight));
        });
        in_flight.set(flight);
    });
}
