#[cfg(test)]
#[path = "modals_test.rs"]
mod modals_test;

/// The overlay dialogs this layer knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Register,
}

/// Visibility store for the auth modals.
///
/// Each modal kind carries an independent open flag; there is no
/// cross-modal exclusivity. Switching from one modal to the other is done
/// by the caller explicitly closing one and opening the other, so both
/// could in principle be open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalsState {
    login_open: bool,
    register_open: bool,
}

impl ModalsState {
    pub fn open(&mut self, kind: ModalKind) {
        *self.flag_mut(kind) = true;
    }

    pub fn close(&mut self, kind: ModalKind) {
        *self.flag_mut(kind) = false;
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Login => self.login_open,
            ModalKind::Register => self.register_open,
        }
    }

    fn flag_mut(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Login => &mut self.login_open,
            ModalKind::Register => &mut self.register_open,
        }
    }
}
