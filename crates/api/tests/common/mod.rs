#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use realty_api::config::ServerConfig;
use realty_api::router::build_app_router;
use realty_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Same builder as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// Send a POST request with an arbitrary body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid `createProperty` input.
pub fn property_input(address: &str) -> serde_json::Value {
    serde_json::json!({
        "address": address,
        "price": 250000,
        "bedrooms": 3,
        "bathrooms": 2,
        "squareFootage": 1500,
        "type": "House",
        "status": "Available",
        "description": null
    })
}

/// A valid `createClient` input.
pub fn client_input(first_name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": first_name,
        "lastName": "Doe",
        "email": email,
        "phone": "555-0001",
        "budget": 500000,
        "desiredPropertyType": "House"
    })
}

/// Create a record through the API and return its id.
pub async fn create_and_get_id(pool: &PgPool, procedure: &str, input: serde_json::Value) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, &format!("/rpc/{procedure}"), input).await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
