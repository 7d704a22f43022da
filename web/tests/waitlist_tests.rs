/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use entity::waitlist;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use uuid::Uuid;

fn create_mock_entry(email: &str) -> waitlist::Model {
    waitlist::Model {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: Some("Test User".to_string()),
        interest: Some("selling".to_string()),
        newsletter: true,
        created_at: Utc::now().naive_utc(),
    }
}

#[tokio::test]
async fn test_waitlist_signup() {
    let entry = create_mock_entry("new@example.com");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<waitlist::Model>::new(), vec![entry.clone()]])
        .into_connection();
    let state = common::create_state_with_db(db).await;
    let server = TestServer::new(web::build_router(state)).unwrap();

    let response = server
        .post("/api/waitlist")
        .json(&json!({
            "email": "new@example.com",
            "name": "Test User",
            "interest": "selling",
            "newsletter": true,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["message"]["email"], json!("new@example.com"));
    assert_eq!(body["message"]["newsletter"], json!(true));
}

#[tokio::test]
async fn test_waitlist_rejects_duplicate_email() {
    let entry = create_mock_entry("taken@example.com");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![entry.clone()]])
        .into_connection();
    let state = common::create_state_with_db(db).await;
    let server = TestServer::new(web::build_router(state)).unwrap();

    let response = server
        .post("/api/waitlist")
        .json(&json!({
            "email": "taken@example.com",
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({
        "error": true,
        "message": "Email is already registered in the waitlist",
    }));
}

#[tokio::test]
async fn test_waitlist_rejects_invalid_email() {
    let state = common::create_mock_state().await;
    let server = TestServer::new(web::build_router(state)).unwrap();

    let response = server
        .post("/api/waitlist")
        .json(&json!({
            "email": "not-an-email",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": true,
        "message": "Invalid Email",
    }));
}
