/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use core::ai::AiService;
use core::consts::NULL_TIME;
use core::types::*;
use entity::user::UserRole;
use entity::*;
use password_auth::generate_hash;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        disable_registration: false,
        report_errors: false,
        llm_enabled: false,
        llm_api_url: "https://api.openai.com/v1".to_string(),
        llm_model: "gpt-4o".to_string(),
        llm_api_key_file: None,
        llm_timeout: 30,
        admin_username: None,
        admin_email: None,
        admin_password_file: None,
    }
}

pub async fn create_mock_state() -> Arc<ServerState> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    create_state_with_db(db).await
}

pub async fn create_state_with_db(db: DatabaseConnection) -> Arc<ServerState> {
    let cli = create_mock_cli();
    let ai = AiService::new(&cli).await.unwrap();

    Arc::new(ServerState { db, cli, ai })
}

pub fn create_mock_user(password: &str) -> user::Model {
    user::Model {
        id: Uuid::new_v4(),
        username: "testuser".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password: generate_hash(password),
        bio: None,
        avatar: None,
        role: UserRole::User,
        last_login_at: *NULL_TIME,
        created_at: Utc::now().naive_utc(),
    }
}

pub fn create_mock_message(sender: Uuid, receiver: Uuid, read: bool) -> message::Model {
    message::Model {
        id: Uuid::new_v4(),
        content: "Hello there".to_string(),
        sender,
        receiver,
        project: None,
        read,
        created_at: Utc::now().naive_utc(),
    }
}

pub fn create_mock_product(seller: Uuid) -> product::Model {
    product::Model {
        id: Uuid::new_v4(),
        name: "Sentiment Analyzer".to_string(),
        description: "Analyzes customer feedback and extracts sentiment trends over time."
            .to_string(),
        price: 49,
        image: None,
        category: "nlp".to_string(),
        tags: Some(vec!["nlp".to_string(), "analytics".to_string()]),
        seller,
        featured: false,
        verification_status: product::VerificationStatus::Pending,
        verification_notes: None,
        created_at: Utc::now().naive_utc(),
    }
}
