use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uketsuke_core::error::ValidationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ValidationError`] for user-correctable rejections and adds
/// the store, lookup, gate, and configuration failure classes.
/// Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A rejected submission; the message is echoed to the user.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup target that does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A second check-in attempt for the same participant.
    #[error("participant {id} is already checked in")]
    AlreadyCheckedIn { id: uuid::Uuid },

    /// Missing or wrong admin credentials.
    #[error("authentication required")]
    Unauthorized,

    /// Required configuration absent at startup. Fatal for the route
    /// that needs it; the rest of the service keeps working.
    #[error("configuration error: {0}")]
    Config(&'static str),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }

            AppError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "該当ユーザーなし".to_string(),
            ),

            AppError::AlreadyCheckedIn { .. } => (
                StatusCode::CONFLICT,
                "ALREADY_CHECKED_IN",
                "すでにチェックイン済みです".to_string(),
            ),

            AppError::Unauthorized => {
                // 401 carries the Basic challenge so browsers prompt
                // for credentials.
                let body = json!({
                    "error": "Authentication required",
                    "code": "UNAUTHORIZED",
                });
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Basic realm=\"Secure Area\"")],
                    axum::Json(body),
                )
                    .into_response();
            }

            AppError::Config(detail) => {
                tracing::error!(detail = %detail, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "サーバー設定エラー（ENV未設定）".to_string(),
                )
            }

            // Store failures: log the detailed cause for operators,
            // show the user a generic message.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "サーバーエラー".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
