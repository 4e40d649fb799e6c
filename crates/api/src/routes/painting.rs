//! Route definitions for the `/paintings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::painting;
use crate::state::AppState;

/// Routes mounted at `/paintings`.
///
/// ```text
/// GET    /{user_id}                  -> list
/// POST   /{user_id}                  -> create
/// GET    /{user_id}/{painting_id}    -> get_by_id
/// PUT    /{user_id}/{painting_id}    -> update
/// DELETE /{user_id}/{painting_id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}", get(painting::list).post(painting::create))
        .route(
            "/{user_id}/{painting_id}",
            get(painting::get_by_id)
                .put(painting::update)
                .delete(painting::delete),
        )
}
