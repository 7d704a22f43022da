/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the product verification rule engine

extern crate core as aimarket_core;
use aimarket_core::types::MProduct;
use aimarket_core::verification::verify_product_rules;
use chrono::DateTime;
use entity::product::VerificationStatus;
use uuid::Uuid;

fn sample_product() -> MProduct {
    MProduct {
        id: Uuid::new_v4(),
        name: "Sentiment Analyzer Pro".to_string(),
        description: "Analyzes customer feedback sentiment in real time using fine-tuned \
                      transformer models."
            .to_string(),
        price: 199,
        image: None,
        category: "Natural Language Processing".to_string(),
        tags: Some(vec!["nlp".to_string(), "sentiment".to_string()]),
        seller: Uuid::new_v4(),
        featured: false,
        verification_status: VerificationStatus::Pending,
        verification_notes: None,
        created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
    }
}

#[test]
fn test_valid_product_approved_with_zero_risk() {
    let result = verify_product_rules(&sample_product());

    assert_eq!(result.status, VerificationStatus::Approved);
    assert_eq!(result.risk_score, 0);
    assert_eq!(result.notes, "Product meets all requirements.");
}

#[test]
fn test_zero_price_rejected() {
    let mut product = sample_product();
    product.price = 0;

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 30);
    assert!(result.notes.contains("Price must be greater than zero"));
    assert!(result.notes.contains("Requires revision before approval"));
}

#[test]
fn test_negative_price_rejected() {
    let mut product = sample_product();
    product.price = -50;

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 30);
}

#[test]
fn test_high_price_approved_with_considerations() {
    let mut product = sample_product();
    product.price = 1500;

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Approved);
    assert_eq!(result.risk_score, 15);
    assert!(result.notes.contains("unusually high"));
    assert!(result.notes.contains("Approved with considerations"));
}

#[test]
fn test_price_boundary_values() {
    let mut product = sample_product();
    product.price = 1;
    assert_eq!(
        verify_product_rules(&product).status,
        VerificationStatus::Approved
    );
    assert_eq!(verify_product_rules(&product).risk_score, 0);

    product.price = 1000;
    assert_eq!(verify_product_rules(&product).risk_score, 0);

    product.price = 1001;
    assert_eq!(verify_product_rules(&product).risk_score, 15);
}

#[test]
fn test_short_description_rejected() {
    let mut product = sample_product();
    product.description = "Too short".to_string();

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 25);
    assert!(result.notes.contains("Description is too short"));
}

#[test]
fn test_description_length_counts_characters() {
    let mut product = sample_product();
    product.description = "超過二十個字符的多字節產品描述文本內容測試".to_string();

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Approved);
    assert_eq!(result.risk_score, 0);

    // 7 characters is 21 bytes, still too short
    product.description = "多字節描述文字".to_string();

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 25);
}

#[test]
fn test_short_name_rejected() {
    let mut product = sample_product();
    product.name = "AI".to_string();

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 20);
    assert!(result.notes.contains("Product name is too short"));
}

#[test]
fn test_missing_category_adds_risk_without_rejection() {
    let mut product = sample_product();
    product.category = String::new();

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Approved);
    assert_eq!(result.risk_score, 10);
    assert!(result.notes.contains("category is missing"));
    assert!(result.notes.contains("Approved with considerations"));
}

#[test]
fn test_suspicious_terms_rejected_and_listed() {
    let mut product = sample_product();
    product.description =
        "This tool will HACK any system and generate free money for you instantly.".to_string();

    let result = verify_product_rules(&product);

    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 25);
    assert!(result.notes.contains("suspicious terms"));
    assert!(result.notes.contains("free money"));
    assert!(result.notes.contains("hack"));
}

#[test]
fn test_suspicious_term_matches_inside_words() {
    let mut product = sample_product();
    product.description =
        "A recipe assistant that suggests scampi dishes based on available ingredients."
            .to_string();

    let result = verify_product_rules(&product);

    // substring matching flags "scam" inside "scampi"
    assert_eq!(result.status, VerificationStatus::Rejected);
    assert!(result.notes.contains("scam"));
}

#[test]
fn test_risk_accumulates_and_clamps_at_100() {
    let product = MProduct {
        id: Uuid::new_v4(),
        name: "X".to_string(),
        description: "free money hack".to_string(),
        price: 0,
        image: None,
        category: String::new(),
        tags: None,
        seller: Uuid::new_v4(),
        featured: false,
        verification_status: VerificationStatus::Pending,
        verification_notes: None,
        created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
    };

    let result = verify_product_rules(&product);

    // 30 + 25 + 20 + 10 + 25 = 110, clamped to 100
    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 100);
}

#[test]
fn test_rejection_is_sticky_across_rules() {
    let mut product = sample_product();
    product.price = -1;
    product.category = String::new();

    let result = verify_product_rules(&product);

    // price rejects, category only adds risk, the final status stays rejected
    assert_eq!(result.status, VerificationStatus::Rejected);
    assert_eq!(result.risk_score, 40);
}
