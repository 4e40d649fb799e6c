//! Handlers for the `/paintings` resource.
//!
//! Every failure a client can cause is answered with a bare status code and
//! an empty body: 400 for a rejected create, 404 for anything that misses an
//! existing painting. Store failures still surface as 500 through [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use easel_core::types::DbId;
use easel_core::validation::not_blank;
use easel_db::models::painting::PaintingView;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::{PaintingInput, PaintingService};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for creating or replacing a painting.
#[derive(Debug, Deserialize, Validate)]
pub struct PaintingRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    /// `None` when the field is absent or `null`.
    #[validate(required(message = "Shapes are required"))]
    pub shapes: Option<Vec<Value>>,
}

/// Response body for create and update.
#[derive(Debug, Serialize)]
pub struct SavedPainting {
    pub id: DbId,
    pub name: String,
    pub shapes: Vec<Value>,
    pub message: &'static str,
}

impl SavedPainting {
    fn new(painting: PaintingView, message: &'static str) -> Self {
        Self {
            id: painting.id,
            name: painting.name,
            shapes: painting.shapes,
            message,
        }
    }
}

/// Response body for delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Failure of a single-painting endpoint.
#[derive(Debug)]
pub enum PaintingFailure {
    /// A client-visible failure: the status code with an empty body.
    Status(StatusCode),
    /// Anything the client did not cause, rendered by [`AppError`].
    App(AppError),
}

impl PaintingFailure {
    /// Collapse domain errors to `status`; let store errors through untouched.
    fn collapse(err: AppError, status: StatusCode) -> Self {
        match err {
            AppError::Core(core) => {
                tracing::debug!(error = %core, %status, "Painting request failed");
                Self::Status(status)
            }
            other => Self::App(other),
        }
    }
}

impl IntoResponse for PaintingFailure {
    fn into_response(self) -> Response {
        match self {
            Self::Status(status) => status.into_response(),
            Self::App(err) => err.into_response(),
        }
    }
}

/// Parse and validate a painting body. Any problem is a 400.
fn validated(
    payload: Result<Json<PaintingRequest>, JsonRejection>,
) -> Result<PaintingInput, PaintingFailure> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected painting body");
        PaintingFailure::Status(StatusCode::BAD_REQUEST)
    })?;

    request.validate().map_err(|errors| {
        tracing::debug!(%errors, "Invalid painting body");
        PaintingFailure::Status(StatusCode::BAD_REQUEST)
    })?;

    Ok(PaintingInput {
        name: request.name,
        shapes: request.shapes.unwrap_or_default(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/paintings/{user_id}
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<PaintingView>>> {
    let paintings = PaintingService::list_for_user(&state.pool, user_id).await?;
    Ok(Json(paintings))
}

/// GET /api/paintings/{user_id}/{painting_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((user_id, painting_id)): Path<(DbId, DbId)>,
) -> Result<Json<PaintingView>, PaintingFailure> {
    PaintingService::get(&state.pool, painting_id, user_id)
        .await
        .map(Json)
        .map_err(|e| PaintingFailure::collapse(e, StatusCode::NOT_FOUND))
}

/// POST /api/paintings/{user_id}
pub async fn create(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    payload: Result<Json<PaintingRequest>, JsonRejection>,
) -> Result<Json<SavedPainting>, PaintingFailure> {
    let input = validated(payload)?;
    let painting = PaintingService::create(&state.pool, user_id, input)
        .await
        .map_err(|e| PaintingFailure::collapse(e, StatusCode::BAD_REQUEST))?;
    Ok(Json(SavedPainting::new(painting, "Painting saved successfully")))
}

/// PUT /api/paintings/{user_id}/{painting_id}
pub async fn update(
    State(state): State<AppState>,
    Path((user_id, painting_id)): Path<(DbId, DbId)>,
    payload: Result<Json<PaintingRequest>, JsonRejection>,
) -> Result<Json<SavedPainting>, PaintingFailure> {
    let input = validated(payload)?;
    let painting = PaintingService::update(&state.pool, painting_id, user_id, input)
        .await
        .map_err(|e| PaintingFailure::collapse(e, StatusCode::NOT_FOUND))?;
    Ok(Json(SavedPainting::new(painting, "Painting updated successfully")))
}

/// DELETE /api/paintings/{user_id}/{painting_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((user_id, painting_id)): Path<(DbId, DbId)>,
) -> Result<Json<MessageResponse>, PaintingFailure> {
    PaintingService::delete(&state.pool, painting_id, user_id)
        .await
        .map_err(|e| PaintingFailure::collapse(e, StatusCode::NOT_FOUND))?;
    Ok(Json(MessageResponse {
        message: "Painting deleted successfully",
    }))
}
