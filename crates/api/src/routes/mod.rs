pub mod auth;
pub mod health;
pub mod painting;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /login                                  login (POST)
///
/// /paintings/{user_id}                    list (GET), create (POST)
/// /paintings/{user_id}/{painting_id}      get (GET), update (PUT), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/paintings", painting::router())
}
