// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store failures surface as HTTP 500 with the store's message.

use axum::http::StatusCode;
use eco_tracker::db::StoreError;
use eco_tracker::error::AppError;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{body_json, get_request, json_request};

#[test]
fn test_store_errors_map_to_app_errors() {
    let err: AppError = StoreError::write("disk full").into();
    assert!(matches!(err, AppError::StoreWrite(ref msg) if msg == "disk full"));

    let err: AppError = StoreError::read("").into();
    assert!(matches!(err, AppError::StoreRead(ref msg) if msg == "unknown"));
}

#[tokio::test]
async fn test_insert_failure_preserves_message() {
    let (app, store) = common::create_test_app();
    store
        .set_fail_on_insert(Some("duplicate key value violates unique constraint"))
        .await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/activities",
            json!({ "category": "FOOD", "amount": 1, "kg": 4.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "duplicate key value violates unique constraint" })
    );
}

#[tokio::test]
async fn test_list_failure_without_message_is_unknown() {
    let (app, store) = common::create_test_app();
    store.set_fail_on_list(Some("")).await;

    let response = app.oneshot(get_request("/api/activities")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "unknown" }));
}

#[tokio::test]
async fn test_offline_store_returns_500() {
    let app = common::create_offline_app();

    let response = app
        .clone()
        .oneshot(get_request("/api/activities"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .contains("offline"));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/activities",
            json!({ "category": "WATER", "amount": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app.oneshot(get_request("/api/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_runs_before_store() {
    // Offline store: a 400 proves the store was never consulted
    let app = common::create_offline_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/activities",
            json!({ "category": "WATER", "amount": "n/a" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
