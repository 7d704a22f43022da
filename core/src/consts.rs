/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub static NULL_TIME: LazyLock<NaiveDateTime> =
    LazyLock::new(|| DateTime::from_timestamp(0, 0).unwrap().naive_utc());

/// Lowercase terms that get a product listing rejected when they appear
/// anywhere in its description.
pub const SUSPICIOUS_TERMS: [&str; 11] = [
    "guaranteed success",
    "100% accuracy",
    "free money",
    "get rich",
    "scam",
    "hack",
    "crack",
    "bypass",
    "illegal",
    "stolen",
    "exploit",
];

pub const VERIFICATION_PROMPT: &str = r#"You are an AI product verifier for an AI marketplace platform.
Your task is to analyze product listings and determine if they appear legitimate or potentially fraudulent.

Analyze the following product information and respond with:
1. A verification status: "approved" or "rejected"
2. Detailed notes explaining your decision
3. A risk score from 0-100 (0 being safest, 100 being highest risk)

Focus on these aspects:
- Realistic pricing for the type of AI product
- Clear and specific description of functionality
- Reasonable promises/claims about capabilities
- Professional presentation
- Appropriate categorization

Product details:"#;

pub const CHATBOT_PROMPT: &str = r#"You are a helpful AI assistant for an AI marketplace platform where users can buy, sell, and request custom AI programs.
Your role is to:
1. Help users understand how the platform works
2. Assist with technical questions about AI products
3. Guide users through the buying/selling process
4. Explain platform policies and features
5. Provide general AI/ML knowledge

Keep responses friendly, concise, and focused on helping users achieve their goals."#;
