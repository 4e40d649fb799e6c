//! HTTP-level integration tests for the `/api/paintings` endpoints.

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::{body_bytes, body_json, delete, get, post_json, put_json};
use easel_core::types::DbId;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a painting through the API and return its id.
async fn create_painting(app: &Router, user_id: DbId, name: &str, shapes: Value) -> DbId {
    let body = json!({ "name": name, "shapes": shapes });
    let response = post_json(app.clone(), &format!("/api/paintings/{user_id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn listed_ids(app: &Router, user_id: DbId) -> Vec<DbId> {
    let response = get(app.clone(), &format!("/api/paintings/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

/// Keeps consecutive writes on distinct `updated_at` values.
async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

async fn setup() -> (Router, DbId, DbId) {
    let pool = common::seeded_pool().await;
    let user1 = common::demo_user(&pool, "user1").await;
    let user2 = common::demo_user(&pool, "user2").await;
    (common::build_test_app(pool), user1.id, user2.id)
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_round_trips_shapes() {
    let (app, user_id, _) = setup().await;
    let shapes = json!([{ "type": "circle", "r": 5 }]);

    let body = json!({ "name": "sketch", "shapes": shapes });
    let response = post_json(app.clone(), &format!("/api/paintings/{user_id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["name"], "sketch");
    assert_eq!(created["shapes"], shapes);
    assert_eq!(created["message"], "Painting saved successfully");
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/paintings/{user_id}/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "sketch");
    assert_eq!(fetched["shapes"], shapes);
    assert!(fetched["created_at"].is_string());
    assert!(fetched["updated_at"].is_string());
}

#[tokio::test]
async fn arbitrary_shape_payloads_are_stored_verbatim() {
    let (app, user_id, _) = setup().await;
    let shapes = json!([
        { "type": "path", "points": [[0, 0], [1.5, -2]], "style": { "stroke": "#ff0000" } },
        { "type": "text", "value": "héllo", "meta": null },
        []
    ]);

    let id = create_painting(&app, user_id, "mixed", shapes.clone()).await;

    let fetched = body_json(get(app, &format!("/api/paintings/{user_id}/{id}")).await).await;
    assert_eq!(fetched["shapes"], shapes);
}

#[tokio::test]
async fn empty_shape_list_is_allowed() {
    let (app, user_id, _) = setup().await;

    let id = create_painting(&app, user_id, "blank canvas", json!([])).await;

    let fetched = body_json(get(app, &format!("/api/paintings/{user_id}/{id}")).await).await;
    assert_eq!(fetched["shapes"], json!([]));
}

#[tokio::test]
async fn timestamps_use_local_datetime_form() {
    let (app, user_id, _) = setup().await;
    let id = create_painting(&app, user_id, "sketch", json!([])).await;

    let fetched = body_json(get(app, &format!("/api/paintings/{user_id}/{id}")).await).await;
    let created_at = fetched["created_at"].as_str().unwrap();

    assert!(
        chrono_like(created_at),
        "created_at should look like YYYY-MM-DDTHH:MM:SS, got {created_at}"
    );
    assert_eq!(fetched["created_at"], fetched["updated_at"]);
}

fn chrono_like(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 19
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b'T'
        && bytes[13] == b':'
        && bytes[16] == b':'
        && !value.ends_with('Z')
}

#[tokio::test]
async fn create_for_unknown_user_is_a_bad_request() {
    let (app, _, _) = setup().await;

    let body = json!({ "name": "sketch", "shapes": [] });
    let response = post_json(app, "/api/paintings/9999", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn create_rejects_blank_name_and_missing_shapes() {
    let (app, user_id, _) = setup().await;
    let uri = format!("/api/paintings/{user_id}");

    for body in [
        json!({ "name": "   ", "shapes": [] }),
        json!({ "shapes": [] }),
        json!({ "name": "sketch" }),
        json!({ "name": "sketch", "shapes": null }),
        json!({ "name": "sketch", "shapes": "circle" }),
    ] {
        let response = post_json(app.clone(), &uri, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert!(body_bytes(response).await.is_empty());
    }

    assert!(listed_ids(&app, user_id).await.is_empty());
}

#[tokio::test]
async fn create_rejects_non_json_body() {
    let (app, user_id, _) = setup().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/paintings/{user_id}"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("sketch"))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_missing_painting_is_not_found_with_empty_body() {
    let (app, user_id, _) = setup().await;

    let response = get(app, &format!("/api/paintings/{user_id}/12345")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_most_recently_updated_first() {
    let (app, user_id, _) = setup().await;

    let first = create_painting(&app, user_id, "first", json!([])).await;
    tick().await;
    let second = create_painting(&app, user_id, "second", json!([])).await;
    tick().await;
    let third = create_painting(&app, user_id, "third", json!([])).await;

    assert_eq!(listed_ids(&app, user_id).await, vec![third, second, first]);

    tick().await;
    let body = json!({ "name": "first, revised", "shapes": [{ "type": "line" }] });
    let response = put_json(app.clone(), &format!("/api/paintings/{user_id}/{first}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(listed_ids(&app, user_id).await, vec![first, third, second]);
}

#[tokio::test]
async fn list_items_carry_the_full_painting_shape() {
    let (app, user_id, _) = setup().await;
    create_painting(&app, user_id, "sketch", json!([{ "type": "circle" }])).await;

    let list = body_json(get(app, &format!("/api/paintings/{user_id}")).await).await;
    let item = &list[0];

    assert_eq!(item["name"], "sketch");
    assert_eq!(item["shapes"], json!([{ "type": "circle" }]));
    assert!(item["created_at"].is_string());
    assert!(item["updated_at"].is_string());
}

#[tokio::test]
async fn list_for_user_without_paintings_is_empty() {
    let (app, _, other) = setup().await;

    assert!(listed_ids(&app, other).await.is_empty());
    assert!(listed_ids(&app, 9999).await.is_empty());
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_name_and_shapes() {
    let (app, user_id, _) = setup().await;
    let id = create_painting(&app, user_id, "draft", json!([{ "type": "circle" }])).await;
    tick().await;

    let body = json!({ "name": "final", "shapes": [{ "type": "rect", "w": 3 }] });
    let response = put_json(app.clone(), &format!("/api/paintings/{user_id}/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "final");
    assert_eq!(updated["shapes"], json!([{ "type": "rect", "w": 3 }]));
    assert_eq!(updated["message"], "Painting updated successfully");

    let fetched = body_json(get(app, &format!("/api/paintings/{user_id}/{id}")).await).await;
    assert_eq!(fetched["name"], "final");
    assert_ne!(fetched["created_at"], fetched["updated_at"]);
}

#[tokio::test]
async fn update_missing_painting_is_not_found() {
    let (app, user_id, _) = setup().await;

    let body = json!({ "name": "ghost", "shapes": [] });
    let response = put_json(app, &format!("/api/paintings/{user_id}/777"), body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn update_with_invalid_body_is_a_bad_request() {
    let (app, user_id, _) = setup().await;
    let id = create_painting(&app, user_id, "draft", json!([])).await;

    let body = json!({ "name": "", "shapes": [] });
    let response = put_json(app, &format!("/api/paintings/{user_id}/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_succeeds_then_reports_not_found() {
    let (app, user_id, _) = setup().await;
    let id = create_painting(&app, user_id, "doomed", json!([])).await;
    let uri = format!("/api/paintings/{user_id}/{id}");

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Painting deleted successfully" })
    );

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    assert_eq!(get(app, &uri).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Ownership scoping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn another_users_id_cannot_reach_the_painting() {
    let (app, owner, intruder) = setup().await;
    let id = create_painting(&app, owner, "private", json!([{ "type": "circle" }])).await;
    let foreign = format!("/api/paintings/{intruder}/{id}");

    assert_eq!(get(app.clone(), &foreign).await.status(), StatusCode::NOT_FOUND);

    let body = json!({ "name": "hijacked", "shapes": [] });
    assert_eq!(
        put_json(app.clone(), &foreign, body).await.status(),
        StatusCode::NOT_FOUND
    );

    assert_eq!(delete(app.clone(), &foreign).await.status(), StatusCode::NOT_FOUND);

    let fetched = body_json(get(app, &format!("/api/paintings/{owner}/{id}")).await).await;
    assert_eq!(fetched["name"], "private");
    assert_eq!(fetched["shapes"], json!([{ "type": "circle" }]));
}

#[tokio::test]
async fn non_numeric_ids_are_rejected() {
    let (app, _, _) = setup().await;

    let response = get(app, "/api/paintings/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
