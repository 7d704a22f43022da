/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::product::VerificationStatus;
use serde::{Deserialize, Serialize};

use super::consts::SUSPICIOUS_TERMS;
use super::types::MProduct;

/// Outcome of a product verification run, either from the rule engine or
/// parsed from an LLM response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub status: VerificationStatus,
    pub notes: String,
    pub risk_score: i64,
}

/// Scores a product listing against the marketplace listing rules. Any single
/// rejection rule makes the final status `Rejected`; risk contributions from
/// all triggered rules accumulate and are clamped to 0-100.
pub fn verify_product_rules(product: &MProduct) -> VerificationResult {
    let mut status = VerificationStatus::Approved;
    let mut risk_score: i64 = 0;
    let mut notes: Vec<String> = Vec::new();

    if product.price <= 0 {
        status = VerificationStatus::Rejected;
        risk_score += 30;
        notes.push("Price must be greater than zero.".to_string());
    }

    if product.price > 1000 {
        risk_score += 15;
        notes.push("Price is unusually high for this marketplace.".to_string());
    }

    if product.description.chars().count() < 20 {
        status = VerificationStatus::Rejected;
        risk_score += 25;
        notes.push(
            "Description is too short to evaluate the product (minimum 20 characters).".to_string(),
        );
    }

    if product.name.chars().count() < 3 {
        status = VerificationStatus::Rejected;
        risk_score += 20;
        notes.push("Product name is too short (minimum 3 characters).".to_string());
    }

    if product.category.trim().is_empty() {
        risk_score += 10;
        notes.push("Product category is missing.".to_string());
    }

    let description = product.description.to_lowercase();
    let matched_terms = SUSPICIOUS_TERMS
        .iter()
        .filter(|term| description.contains(*term))
        .copied()
        .collect::<Vec<&str>>();

    if !matched_terms.is_empty() {
        status = VerificationStatus::Rejected;
        risk_score += 25;
        notes.push(format!(
            "Description contains suspicious terms: {}.",
            matched_terms.join(", ")
        ));
    }

    let notes = if notes.is_empty() {
        "Product meets all requirements.".to_string()
    } else if status == VerificationStatus::Approved {
        format!("{} Approved with considerations.", notes.join(" "))
    } else {
        format!("{} Requires revision before approval.", notes.join(" "))
    };

    VerificationResult {
        status,
        notes,
        risk_score: risk_score.clamp(0, 100),
    }
}
