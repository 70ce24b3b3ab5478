#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::CurrentUser;

/// Authentication state tracking the current user and loading status.
///
/// The user is resolved once per page load by the current-user endpoint
/// and treated as read-only input here; absence means anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_anonymous(&self) -> bool {
        self.user.is_none()
    }
}
