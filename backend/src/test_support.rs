use std::sync::Arc;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::{build_pool, build_router, config::server_config::CorsOrigins, prepare_database, AppState};

pub fn test_app() -> (Router, Arc<AppState>) {
    let pool = build_pool(":memory:").expect("in-memory pool");
    prepare_database(&pool).expect("migrations run");
    let state = Arc::new(AppState::new(pool));
    (build_router(state.clone(), &CorsOrigins::Any), state)
}

pub fn seeded_app() -> Router {
    let (app, state) = test_app();
    state
        .content_repository
        .seed_defaults(chrono::Utc::now().timestamp())
        .expect("seed defaults");
    app
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
