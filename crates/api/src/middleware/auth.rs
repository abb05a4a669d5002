//! Basic-Auth gate for the admin route prefix.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured admin credentials.
///
/// Use as an extractor parameter on any admin handler:
///
/// ```ignore
/// async fn roster(_admin: AdminAuth, ...) -> AppResult<Json<...>> { ... }
/// ```
///
/// There is no session or token issuance; the header is re-checked on
/// every request. A missing or mismatched header yields 401 with a
/// Basic challenge. Missing credentials in the environment yield a
/// distinct configuration error instead of silently allowing access.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin.as_ref() else {
            return Err(AppError::Config("ADMIN_USERNAME / ADMIN_PASSWORD not set"));
        };

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let encoded = header.strip_prefix("Basic ").ok_or(AppError::Unauthorized)?;

        let decoded = BASE64
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(AppError::Unauthorized)?;

        let (username, password) = decoded.split_once(':').ok_or(AppError::Unauthorized)?;

        if username != expected.username || password != expected.password {
            return Err(AppError::Unauthorized);
        }

        Ok(AdminAuth)
    }
}
