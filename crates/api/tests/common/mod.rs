use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use easel_api::config::ServerConfig;
use easel_api::router::build_app_router;
use easel_api::state::AppState;
use easel_db::models::user::UserView;
use easel_db::repositories::UserRepo;
use easel_db::DbPool;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_vars(|key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("0".to_string()),
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .expect("test config should parse")
}

/// Fresh in-memory database, migrated and seeded with the demo users.
pub async fn seeded_pool() -> DbPool {
    let pool = easel_db::create_memory_pool()
        .await
        .expect("in-memory pool should open");
    easel_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    easel_db::seed::seed_demo_users(&pool)
        .await
        .expect("seeding should succeed");
    pool
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Public view of a seeded demo user.
pub async fn demo_user(pool: &DbPool, username: &str) -> UserView {
    UserRepo::find_by_username(pool, username)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("{username} should be seeded"))
        .into()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
