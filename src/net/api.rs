//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/failure since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result`/outcome values instead of panics so
//! auth failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{Credentials, CurrentUser, RegisterPayload};
use crate::state::session::SignInResult;

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<CurrentUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CurrentUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with the credentials provider via `POST /api/auth/login`.
///
/// The outcome is decided purely by the presence of `ok`/`error` in the
/// response body; transport failures fold into `Failure`. The response
/// body is not otherwise inspected.
pub async fn sign_in(credentials: &Credentials) -> SignInResult {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct SignInRequest<'a> {
            provider: &'static str,
            #[serde(flatten)]
            credentials: &'a Credentials,
            redirect: bool,
        }

        #[derive(Default, serde::Deserialize)]
        struct SignInResponse {
            #[serde(default)]
            ok: Option<bool>,
            #[serde(default)]
            error: Option<String>,
        }

        let request = SignInRequest {
            provider: "credentials",
            credentials,
            redirect: false,
        };
        let resp = match gloo_net::http::Request::post("/api/auth/login").json(&request) {
            Ok(req) => req.send().await,
            Err(e) => return SignInResult::Failure(e.to_string()),
        };
        let resp = match resp {
            Ok(r) => r,
            Err(e) => return SignInResult::Failure(e.to_string()),
        };
        let body: SignInResponse = resp.json().await.unwrap_or_default();
        if let Some(error) = body.error {
            SignInResult::Failure(error)
        } else if body.ok.is_some() {
            SignInResult::Success
        } else {
            SignInResult::Failure("sign-in did not complete".to_owned())
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        SignInResult::Failure("not available on server".to_owned())
    }
}

/// Start the Google OAuth flow by navigating to its endpoint. The
/// provider owns everything past the redirect.
pub fn sign_in_google() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href("/auth/google");
        }
    }
}

/// Create an account via `POST /api/register`.
///
/// Success is any non-error response; the body is not inspected for
/// structured error detail.
///
/// # Errors
///
/// Returns an error string if the request fails or the server answers
/// with an error status.
pub async fn register(payload: &RegisterPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(())
        } else {
            Err(format!("register request failed: {}", resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
/// Fire-and-forget.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
