#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navbar user menu and page-level data refresh.
///
/// The menu flag is orthogonal to modal visibility. `data_epoch` is a
/// monotonic counter bumped when page resources should refetch, e.g.
/// after a successful login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub data_epoch: u64,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Ask page-level resources to refetch their data.
    pub fn request_refresh(&mut self) {
        self.data_epoch += 1;
    }
}
