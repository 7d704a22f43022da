/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod ai;
pub mod chat;
pub mod consts;
pub mod database;
pub mod input;
pub mod messaging;
pub mod types;
pub mod verification;

// This crate is linked as `core`, which shadows the sysroot `core` crate in
// dependents' extern preludes. Macro-generated absolute paths (e.g.
// `::core::future::Future` from `#[tokio::main]`/`#[tokio::test]`) land here,
// so forward the modules they rely on to the real `core`.
pub use ::core::{future, pin, prelude};

use ai::AiService;
use anyhow::Result;
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    println!("Starting AIMarket Server on {}:{}", cli.ip, cli.port);

    let ai = AiService::new(&cli).await?;
    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli, ai }))
}
