/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, bail};
use entity::product::VerificationStatus;
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tokio::fs;

use super::chat::respond_to_message;
use super::consts::{CHATBOT_PROMPT, VERIFICATION_PROMPT};
use super::types::{Cli, MProduct};
use super::verification::{VerificationResult, verify_product_rules};

/// Product verification and chat backend. Uses the built-in rule engine by
/// default and delegates to an OpenAI-compatible chat completion API when the
/// LLM backend is enabled.
#[derive(Debug)]
pub struct AiService {
    backend: AiBackend,
}

#[derive(Debug)]
enum AiBackend {
    Rules,
    Llm(LlmClient),
}

pub struct LlmClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl AiService {
    pub async fn new(cli: &Cli) -> Result<Self> {
        if !cli.llm_enabled {
            return Ok(Self {
                backend: AiBackend::Rules,
            });
        }

        let api_key_file = cli
            .llm_api_key_file
            .as_ref()
            .context("LLM API key file is required when the LLM backend is enabled")?;

        let api_key = fs::read_to_string(api_key_file)
            .await
            .context("Failed to read LLM API key file")?
            .trim()
            .to_string();

        if api_key.is_empty() {
            bail!("LLM API key file is empty");
        }

        let client = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(cli.llm_timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            backend: AiBackend::Llm(LlmClient {
                client,
                api_url: cli.llm_api_url.trim_end_matches('/').to_string(),
                api_key,
                model: cli.llm_model.clone(),
            }),
        })
    }

    pub fn is_llm_enabled(&self) -> bool {
        matches!(self.backend, AiBackend::Llm(_))
    }

    pub async fn verify_product(&self, product: &MProduct) -> Result<VerificationResult> {
        match &self.backend {
            AiBackend::Rules => Ok(verify_product_rules(product)),
            AiBackend::Llm(client) => client.verify_product(product).await,
        }
    }

    pub async fn respond_to_chat(&self, message: &str) -> Result<String> {
        match &self.backend {
            AiBackend::Rules => Ok(respond_to_message(message)),
            AiBackend::Llm(client) => client.chat(message).await,
        }
    }
}

impl LlmClient {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [
                    { "role": "system", "content": system_prompt },
                    { "role": "user", "content": user_content },
                ],
                "temperature": 0.7,
            }))
            .send()
            .await
            .context("Request to the LLM backend failed")?;

        if !response.status().is_success() {
            bail!("LLM backend returned status {}", response.status());
        }

        let completion = response
            .json::<serde_json::Value>()
            .await
            .context("Failed to parse LLM backend response")?;

        Ok(completion["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string())
    }

    async fn verify_product(&self, product: &MProduct) -> Result<VerificationResult> {
        let tags = product
            .tags
            .as_ref()
            .filter(|tags| !tags.is_empty())
            .map(|tags| tags.join(", "))
            .unwrap_or_else(|| "None".to_string());

        let details = format!(
            "\nName: {}\nPrice: ${}\nCategory: {}\nDescription: {}\nTags: {}\n",
            product.name, product.price, product.category, product.description, tags
        );

        let response = self.complete(VERIFICATION_PROMPT, &details).await?;
        Ok(parse_verification_response(&response))
    }

    async fn chat(&self, message: &str) -> Result<String> {
        let answer = self.complete(CHATBOT_PROMPT, message).await?;

        if answer.is_empty() {
            return Ok(
                "I apologize, but I am unable to provide an answer at this moment.".to_string(),
            );
        }

        Ok(answer)
    }
}

/// Parses the three-part verdict format the verification prompt asks for: the
/// first line carries the status, the middle lines the notes, the last line
/// the risk score. A response without a parsable score falls back to risk 50.
pub fn parse_verification_response(response: &str) -> VerificationResult {
    let lines = response.lines().collect::<Vec<&str>>();

    let status = if lines
        .first()
        .is_some_and(|line| line.to_lowercase().contains("approved"))
    {
        VerificationStatus::Approved
    } else {
        VerificationStatus::Rejected
    };

    let notes = if lines.len() > 2 {
        lines[1..lines.len() - 1]
            .join("\n")
            .replacen("Notes:", "", 1)
            .trim()
            .to_string()
    } else {
        String::new()
    };

    let risk_score = lines
        .last()
        .and_then(|line| first_integer(line))
        .unwrap_or(50)
        .clamp(0, 100);

    VerificationResult {
        status,
        notes,
        risk_score,
    }
}

fn first_integer(s: &str) -> Option<i64> {
    let digits = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>();

    digits.parse().ok()
}
