//! HTTP-level integration tests for the property procedures.
//!
//! Uses `tower::ServiceExt` to send requests directly to the router
//! without a TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_and_get_id, get, post_json, post_raw, property_input};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_property_returns_numbers(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/rpc/createProperty", property_input("123 Main St")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["id"].is_number());
    assert_eq!(data["address"], "123 Main St");
    assert_eq!(data["price"], 250000.0);
    assert_eq!(data["squareFootage"], 1500.0);
    assert!(data["price"].is_number(), "price must not be a string");
    assert_eq!(data["type"], "House");
    assert_eq!(data["status"], "Available");
    assert!(data["description"].is_null());
    assert!(data["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_property_by_id(pool: PgPool) {
    let id = create_and_get_id(&pool, "createProperty", property_input("9 Query Ln")).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/rpc/getPropertyById?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["address"], "9 Query Ln");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_property_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/rpc/getPropertyById?id=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Property with id 999999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_property_without_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/rpc/getPropertyById?id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_properties_in_creation_order(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/rpc/getProperties").await).await;
    assert_eq!(json["data"], serde_json::json!([]));

    let first = create_and_get_id(&pool, "createProperty", property_input("1 First St")).await;
    let second = create_and_get_id(&pool, "createProperty", property_input("2 Second St")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/rpc/getProperties").await).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_non_positive_price(pool: PgPool) {
    let mut input = property_input("0 Free St");
    input["price"] = serde_json::json!(0);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/rpc/createProperty", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/rpc/getProperties").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_unknown_type(pool: PgPool) {
    let mut input = property_input("3 Castle Rd");
    input["type"] = serde_json::json!("Castle");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/rpc/createProperty", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_sub_cent_price(pool: PgPool) {
    let mut input = property_input("4 Penny Ln");
    input["price"] = serde_json::json!(100.005);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/rpc/createProperty", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "price must have at most 2 decimal places");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_tiny_positive_price(pool: PgPool) {
    let mut input = property_input("5 Dust Ct");
    input["price"] = serde_json::json!(1e-30);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/rpc/createProperty", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "price must have at most 2 decimal places");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/rpc/getProperties").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_missing_field(pool: PgPool) {
    let mut input = property_input("5 Partial St");
    input.as_object_mut().unwrap().remove("bedrooms");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/rpc/createProperty", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_json_is_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/rpc/createProperty", "{\"address\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_partial_update_changes_only_supplied_fields(pool: PgPool) {
    let mut input = property_input("6 Patch Pl");
    input["description"] = serde_json::json!("Sunny");
    let id = create_and_get_id(&pool, "createProperty", input).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/rpc/updateProperty",
        serde_json::json!({"id": id, "price": 260000.5, "status": "Under Contract"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["price"], 260000.5);
    assert_eq!(data["status"], "Under Contract");
    assert_eq!(data["address"], "6 Patch Pl");
    assert_eq!(data["bedrooms"], 3);
    assert_eq!(data["description"], "Sunny");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/rpc/updateProperty",
        serde_json::json!({"id": id, "description": null}),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert!(data["description"].is_null());
    assert_eq!(data["price"], 260000.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_property_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/rpc/updateProperty",
        serde_json::json!({"id": 424242, "bedrooms": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Property with id 424242 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_validates_present_fields(pool: PgPool) {
    let id = create_and_get_id(&pool, "createProperty", property_input("7 Check St")).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/rpc/updateProperty",
        serde_json::json!({"id": id, "bathrooms": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_property_reports_success(pool: PgPool) {
    let id = create_and_get_id(&pool, "createProperty", property_input("8 Gone St")).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/rpc/deleteProperty", serde_json::json!({"id": id})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["success"], true);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/rpc/getPropertyById?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a property that does not exist must not claim success.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_property_reports_failure(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/rpc/deleteProperty", serde_json::json!({"id": 999999})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["success"], false);
}
