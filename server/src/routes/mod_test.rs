use axum::body::Body;
use axum::http::{Method, Request, header};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

async fn status_of(method: Method, uri: &str, body: Option<&str>) -> StatusCode {
    let app = api_routes(test_app_state());
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
        .unwrap();
    app.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(status_of(Method::GET, "/healthz", None).await, StatusCode::OK);
}

#[tokio::test]
async fn me_without_session_is_401() {
    assert_eq!(status_of(Method::GET, "/api/auth/me", None).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_food_without_session_is_401() {
    let body = r#"{"name":"Soup","category":"starter","price_cents":500}"#;
    assert_eq!(status_of(Method::POST, "/api/foods", Some(body)).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn orders_and_support_require_session() {
    assert_eq!(status_of(Method::GET, "/api/orders", None).await, StatusCode::UNAUTHORIZED);
    assert_eq!(status_of(Method::GET, "/api/support/messages", None).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_category_is_rejected_before_querying() {
    assert_eq!(
        status_of(Method::GET, "/api/foods?category=brunch", None).await,
        StatusCode::UNPROCESSABLE_ENTITY
    );
}
