/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for message entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_message_entity_basic() -> Result<(), DbErr> {
    let message_id = Uuid::new_v4();
    let sender_id = Uuid::new_v4();
    let receiver_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![message::Model {
            id: message_id,
            content: "Is the API still available?".to_owned(),
            sender: sender_id,
            receiver: receiver_id,
            project: None,
            read: false,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = message::Entity::find_by_id(message_id).one(&db).await?;

    assert!(result.is_some());
    let message = result.unwrap();
    assert_eq!(message.sender, sender_id);
    assert_eq!(message.receiver, receiver_id);
    assert!(!message.read);
    assert_eq!(message.project, None);

    Ok(())
}

#[tokio::test]
async fn test_message_entity_with_project() -> Result<(), DbErr> {
    let message_id = Uuid::new_v4();
    let sender_id = Uuid::new_v4();
    let receiver_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![message::Model {
            id: message_id,
            content: "I can take this project.".to_owned(),
            sender: sender_id,
            receiver: receiver_id,
            project: Some(project_id),
            read: true,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = message::Entity::find_by_id(message_id).one(&db).await?;

    assert!(result.is_some());
    let message = result.unwrap();
    assert_eq!(message.project, Some(project_id));
    assert!(message.read);

    Ok(())
}
