/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::ai::AiService;
use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "AIMarket", display_name = "AIMarket", bin_name = "aimarket-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "AIMARKET_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "AIMARKET_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "AIMARKET_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "AIMARKET_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "AIMARKET_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "AIMARKET_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "AIMARKET_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "AIMARKET_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "AIMARKET_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "AIMARKET_LLM_ENABLED", default_value = "false")]
    pub llm_enabled: bool,
    #[arg(
        long,
        env = "AIMARKET_LLM_API_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub llm_api_url: String,
    #[arg(long, env = "AIMARKET_LLM_MODEL", default_value = "gpt-4o")]
    pub llm_model: String,
    #[arg(long, env = "AIMARKET_LLM_API_KEY_FILE")]
    pub llm_api_key_file: Option<String>,
    #[arg(long, env = "AIMARKET_LLM_TIMEOUT", value_parser = greater_than_zero::<u64>, default_value = "30")]
    pub llm_timeout: u64,
    #[arg(long, env = "AIMARKET_ADMIN_USERNAME")]
    pub admin_username: Option<String>,
    #[arg(long, env = "AIMARKET_ADMIN_EMAIL")]
    pub admin_email: Option<String>,
    #[arg(long, env = "AIMARKET_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub ai: AiService,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EMessage = message::Entity;
pub type ENews = news::Entity;
pub type EProduct = product::Entity;
pub type EProject = project::Entity;
pub type EUser = user::Entity;
pub type EWaitlist = waitlist::Entity;

pub type MMessage = message::Model;
pub type MNews = news::Model;
pub type MProduct = product::Model;
pub type MProject = project::Model;
pub type MUser = user::Model;
pub type MWaitlist = waitlist::Model;

pub type AMessage = message::ActiveModel;
pub type ANews = news::ActiveModel;
pub type AProduct = product::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AWaitlist = waitlist::ActiveModel;

pub type CMessage = message::Column;
pub type CNews = news::Column;
pub type CProduct = product::Column;
pub type CProject = project::Column;
pub type CUser = user::Column;
pub type CWaitlist = waitlist::Column;

pub type RMessage = message::Relation;
pub type RNews = news::Relation;
pub type RProduct = product::Relation;
pub type RProject = project::Relation;
pub type RUser = user::Relation;
pub type RWaitlist = waitlist::Relation;
