//! Wire types shared with the server.

use serde::{Deserialize, Serialize};

/// The externally resolved identity of the active session. Absence means
/// the visitor is anonymous; this layer never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Login credentials posted to the sign-in endpoint. Transient: created
/// on submit, discarded after the request settles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload posted to `/api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}
