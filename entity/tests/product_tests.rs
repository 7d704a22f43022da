/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for product entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_product_entity_basic() -> Result<(), DbErr> {
    let product_id = Uuid::new_v4();
    let seller_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product::Model {
            id: product_id,
            name: "Sentiment Analysis API".to_owned(),
            description: "Real-time sentiment analysis for customer feedback".to_owned(),
            price: 299,
            image: None,
            category: "nlp".to_owned(),
            tags: Some(vec!["nlp".to_owned(), "api".to_owned()]),
            seller: seller_id,
            featured: false,
            verification_status: product::VerificationStatus::Pending,
            verification_notes: None,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = product::Entity::find_by_id(product_id).one(&db).await?;

    assert!(result.is_some());
    let product = result.unwrap();
    assert_eq!(product.name, "Sentiment Analysis API");
    assert_eq!(product.seller, seller_id);
    assert_eq!(product.price, 299);
    assert_eq!(
        product.verification_status,
        product::VerificationStatus::Pending
    );
    assert_eq!(
        product.tags,
        Some(vec!["nlp".to_owned(), "api".to_owned()])
    );

    Ok(())
}

#[tokio::test]
async fn test_product_entity_with_verification() -> Result<(), DbErr> {
    let product_id = Uuid::new_v4();
    let seller_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product::Model {
            id: product_id,
            name: "Vision Toolkit".to_owned(),
            description: "Object detection models for edge devices".to_owned(),
            price: 499,
            image: Some("https://example.com/vision.png".to_owned()),
            category: "computer-vision".to_owned(),
            tags: None,
            seller: seller_id,
            featured: true,
            verification_status: product::VerificationStatus::Approved,
            verification_notes: Some("Product meets all requirements.".to_owned()),
            created_at: naive_date,
        }]])
        .into_connection();

    let result = product::Entity::find_by_id(product_id).one(&db).await?;

    assert!(result.is_some());
    let product = result.unwrap();
    assert!(product.featured);
    assert_eq!(
        product.verification_status,
        product::VerificationStatus::Approved
    );
    assert_eq!(
        product.verification_notes.as_deref(),
        Some("Product meets all requirements.")
    );

    Ok(())
}
