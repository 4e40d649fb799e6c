use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use easel_core::error::CoreError;
use serde_json::json;

/// Application-level error type for services and HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses; endpoints with a narrower failure contract translate the
/// `Core` variant themselves before it gets here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `easel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::UnknownUser(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Serialization(_) => {
                    (StatusCode::BAD_REQUEST, "SERIALIZATION_ERROR", core.to_string())
                }
                CoreError::Deserialization(_) => {
                    tracing::error!(error = %core, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            // Detail stays in the log.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
