//! End-to-end tests for the HTTP surface over the in-memory catalog.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;
use vitrine_core::{App, AppStatus};
use vitrine_interface::MemoryCatalog;
use vitrine_server::{ApiState, create_router};

fn published(name: &str, view_count: i32, average_rating: f64, rating_count: i32) -> App {
    let now = Utc::now();
    App {
        id: Uuid::new_v4(),
        name: name.to_string(),
        short_description: format!("{name} summary"),
        description: format!("{name} long form"),
        launch_url: format!("https://example.com/{name}"),
        screenshot_url: None,
        key_learnings: None,
        status: AppStatus::Published,
        category_id: Uuid::new_v4(),
        creator_id: Some(Uuid::new_v4()),
        view_count,
        average_rating,
        rating_count,
        created_at: now - Duration::days(1),
        updated_at: now - Duration::days(1),
        rejection_reason: None,
        tool_ids: vec![],
        tag_ids: vec![],
    }
}

async fn router_with(catalog: MemoryCatalog) -> Router {
    create_router(ApiState::new(Arc::new(catalog)))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_answers() {
    let router = router_with(MemoryCatalog::new()).await;
    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn listing_hides_drafts_from_strangers() {
    let catalog = MemoryCatalog::new();
    let creator = Uuid::new_v4();
    let mut draft = published("secret", 0, 0.0, 0);
    draft.status = AppStatus::Draft;
    draft.creator_id = Some(creator);
    catalog.insert_app(draft).await;
    catalog.insert_app(published("open", 0, 0.0, 0)).await;
    let router = router_with(catalog).await;

    let response = router
        .clone()
        .oneshot(Request::get("/api/apps").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "open");

    let response = router
        .oneshot(
            Request::get("/api/apps")
                .header("x-user-id", creator.to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn status_filter_cannot_expose_drafts_on_the_public_route() {
    let catalog = MemoryCatalog::new();
    let mut draft = published("private-draft", 0, 0.0, 0);
    draft.status = AppStatus::Draft;
    catalog.insert_app(draft).await;
    catalog.insert_app(published("open", 0, 0.0, 0)).await;
    let router = router_with(catalog).await;

    // Anonymous callers get published listings only, status filter or not.
    let response = router
        .clone()
        .oneshot(
            Request::get("/api/apps?status=draft")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "open");

    // The moderation route honors the filter but demands an identity.
    let response = router
        .clone()
        .oneshot(
            Request::get("/api/moderation/apps?status=draft")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = router
        .oneshot(
            Request::get("/api/moderation/apps?status=draft")
                .header("x-user-id", Uuid::new_v4().to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "private-draft");
}

#[tokio::test]
async fn hidden_detail_page_is_a_plain_404() {
    let catalog = MemoryCatalog::new();
    let mut draft = published("secret", 0, 0.0, 0);
    draft.status = AppStatus::Draft;
    let id = draft.id;
    catalog.insert_app(draft).await;
    let router = router_with(catalog).await;

    let response = router
        .clone()
        .oneshot(Request::get(format!("/api/apps/{id}")).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Same status as a genuinely missing id.
    let response = router
        .oneshot(
            Request::get(format!("/api/apps/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trending_sort_is_honored_by_the_query_string() {
    let catalog = MemoryCatalog::new();
    catalog.insert_app(published("quiet", 1, 5.0, 1)).await;
    catalog.insert_app(published("loud", 5, 4.0, 10)).await;
    let router = router_with(catalog).await;

    let response = router
        .oneshot(
            Request::get("/api/apps?sort=trending")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "loud");
    assert_eq!(body[1]["name"], "quiet");
}

#[tokio::test]
async fn creating_requires_an_identity() {
    let catalog = MemoryCatalog::new();
    let category = catalog.add_category("games").await;
    let router = router_with(catalog).await;
    let payload = json!({
        "name": "minesweeper",
        "short_description": "a classic",
        "description": "the classic, rebuilt",
        "launch_url": "https://example.com/mines",
        "category_id": category.id,
    });

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/apps")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let creator = Uuid::new_v4();
    let response = router
        .oneshot(
            Request::post("/api/apps")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-user-id", creator.to_string())
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "draft");
    assert_eq!(body["creator_id"], creator.to_string());
}

#[tokio::test]
async fn create_with_unknown_category_is_unprocessable() {
    let router = router_with(MemoryCatalog::new()).await;
    let payload = json!({
        "name": "orphan",
        "short_description": "s",
        "description": "d",
        "launch_url": "https://example.com",
        "category_id": Uuid::new_v4(),
    });
    let response = router
        .oneshot(
            Request::post("/api/apps")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-user-id", Uuid::new_v4().to_string())
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn launch_endpoint_counts_an_open() {
    let catalog = MemoryCatalog::new();
    let app = published("clock", 0, 0.0, 0);
    let id = app.id;
    catalog.insert_app(app).await;
    let router = router_with(catalog).await;

    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/api/apps/{id}/launch"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(Request::get(format!("/api/apps/{id}")).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["view_count"], 1);
}

#[tokio::test]
async fn reference_data_endpoints_answer() {
    let catalog = MemoryCatalog::new();
    catalog.add_category("games").await;
    catalog.add_tool("claude").await;
    catalog.add_tag("web").await;
    let router = router_with(catalog).await;

    for path in ["/api/categories", "/api/tools", "/api/tags"] {
        let response = router
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
