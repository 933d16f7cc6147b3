//! REST API helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `bool`/`Result` outputs instead of panics so a failed check or
//! login degrades into "not signed in" rather than crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(feature = "hydrate")]
const CHECK_ENDPOINT: &str = "/api/auth/check";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Message shown when the server rejects the submitted credentials.
pub const BAD_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";

/// `Authorization` header value carrying a session token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        BAD_CREDENTIALS_MESSAGE.to_owned()
    } else {
        format!("login failed: {status}")
    }
}

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[cfg(feature = "hydrate")]
#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Ask the server whether `token` still identifies a live session.
///
/// Any transport failure counts as a rejection.
pub async fn check_token(token: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get(CHECK_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
        else {
            log::warn!("session check request failed");
            return false;
        };
        resp.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        false
    }
}

/// Exchange credentials for a session token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-facing message if the request fails or the credentials
/// are rejected.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { username, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Revoke the session via `POST /api/auth/logout`. Best effort.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
