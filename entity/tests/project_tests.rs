/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for project entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_project_entity_basic() -> Result<(), DbErr> {
    let project_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project::Model {
            id: project_id,
            title: "Chatbot for support desk".to_owned(),
            description: "We need a chatbot handling first-level tickets".to_owned(),
            requirements: "German and English, on-premise deployment".to_owned(),
            min_budget: Some(5000),
            max_budget: Some(12000),
            deadline: Some("2025-06-30".to_owned()),
            status: project::ProjectStatus::Open,
            created_by: user_id,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = project::Entity::find_by_id(project_id).one(&db).await?;

    assert!(result.is_some());
    let project = result.unwrap();
    assert_eq!(project.title, "Chatbot for support desk");
    assert_eq!(project.created_by, user_id);
    assert_eq!(project.status, project::ProjectStatus::Open);
    assert_eq!(project.min_budget, Some(5000));

    Ok(())
}

#[tokio::test]
async fn test_project_entity_without_budget() -> Result<(), DbErr> {
    let project_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project::Model {
            id: project_id,
            title: "Data labeling pipeline".to_owned(),
            description: "Automated labeling for image datasets".to_owned(),
            requirements: "Open budget, flexible timeline".to_owned(),
            min_budget: None,
            max_budget: None,
            deadline: None,
            status: project::ProjectStatus::InProgress,
            created_by: user_id,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = project::Entity::find_by_id(project_id).one(&db).await?;

    assert!(result.is_some());
    let project = result.unwrap();
    assert_eq!(project.min_budget, None);
    assert_eq!(project.deadline, None);
    assert_eq!(project.status, project::ProjectStatus::InProgress);

    Ok(())
}
