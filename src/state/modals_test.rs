use super::*;

// =============================================================
// ModalsState defaults
// =============================================================

#[test]
fn modals_default_all_closed() {
    let state = ModalsState::default();
    assert!(!state.is_open(ModalKind::Login));
    assert!(!state.is_open(ModalKind::Register));
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn open_sets_only_the_named_modal() {
    let mut state = ModalsState::default();
    state.open(ModalKind::Login);
    assert!(state.is_open(ModalKind::Login));
    assert!(!state.is_open(ModalKind::Register));
}

#[test]
fn close_resets_only_the_named_modal() {
    let mut state = ModalsState::default();
    state.open(ModalKind::Login);
    state.open(ModalKind::Register);
    state.close(ModalKind::Login);
    assert!(!state.is_open(ModalKind::Login));
    assert!(state.is_open(ModalKind::Register));
}

#[test]
fn open_is_idempotent() {
    let mut state = ModalsState::default();
    state.open(ModalKind::Register);
    state.open(ModalKind::Register);
    assert!(state.is_open(ModalKind::Register));
    state.close(ModalKind::Register);
    assert!(!state.is_open(ModalKind::Register));
}

#[test]
fn close_on_closed_modal_is_a_no_op() {
    let mut state = ModalsState::default();
    state.close(ModalKind::Login);
    assert_eq!(state, ModalsState::default());
}

// No exclusivity between the two modals: the store allows both to be
// open at the same time.
#[test]
fn both_modals_may_be_open_simultaneously() {
    let mut state = ModalsState::default();
    state.open(ModalKind::Login);
    state.open(ModalKind::Register);
    assert!(state.is_open(ModalKind::Login));
    assert!(state.is_open(ModalKind::Register));
}
