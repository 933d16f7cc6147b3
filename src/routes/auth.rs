//! Auth routes: console login, token check, logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::credentials::credentials_match;
use crate::services::session::Session;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// Every auth failure surfaces as `401` with a JSON error body.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid or expired session")]
    InvalidSession,
    #[error("invalid username or password")]
    BadCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Extract the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Live session resolved from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthSession {
    pub session: Session,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?.to_owned();
        let app_state = AppState::from_ref(state);
        let session = app_state
            .sessions
            .validate(&token)
            .await
            .ok_or(AuthError::InvalidSession)?;
        Ok(Self { session, token })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub username: String,
}

/// `POST /api/auth/login` — exchange credentials for a session token.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
    let config = &state.config;
    if !credentials_match(&config.username, &config.password, &body.username, &body.password) {
        tracing::warn!(username = %body.username, "console login rejected");
        return Err(AuthError::BadCredentials);
    }

    let token = state.sessions.create(&body.username).await;
    tracing::info!(username = %body.username, "console session created");
    Ok(Json(LoginResponse { token }))
}

/// `GET /api/auth/check` — `200` with the account name while the token is live.
pub async fn check(auth: AuthSession) -> Json<CheckResponse> {
    Json(CheckResponse { username: auth.session.username })
}

/// `POST /api/auth/logout` — revoke the presented token.
pub async fn logout(State(state): State<AppState>, auth: AuthSession) -> StatusCode {
    state.sessions.revoke(&auth.token).await;
    tracing::info!(username = %auth.session.username, "console session revoked");
    StatusCode::NO_CONTENT
}
