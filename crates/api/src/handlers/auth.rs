//! Handlers for the `/login` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use easel_core::error::CoreError;
use easel_core::validation::{first_message, not_blank};
use easel_db::models::user::UserView;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::AuthService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
}

/// Login outcome. Exactly one of `user` and `error` is present.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResponse {
    fn success(user: UserView) -> Self {
        Self {
            success: true,
            user: Some(user),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(error.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Check a username/password pair. Malformed or blank input is a 400, a bad
/// username or password a 401; both carry `{ success: false, error }`.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected login body");
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(LoginResponse::failure("Malformed login request")),
            ));
        }
    };

    if let Err(errors) = input.validate() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure(first_message(&errors))),
        ));
    }

    match AuthService::authenticate(&state.pool, &input.username, &input.password).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "Login succeeded");
            Ok((StatusCode::OK, Json(LoginResponse::success(user))))
        }
        Err(AppError::Core(
            err @ (CoreError::UnknownUser(_) | CoreError::InvalidCredentials),
        )) => {
            tracing::info!(username = %input.username, reason = %err, "Login failed");
            Ok((
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse::failure(err.to_string())),
            ))
        }
        Err(err) => Err(err),
    }
}
