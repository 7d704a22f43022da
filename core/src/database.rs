/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use entity::user::UserRole;
use migration::Migrator;
use password_auth::generate_hash;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::NULL_TIME;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    // Configure database connection options
    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    // Set other connection options
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    update_db(&db, cli)
        .await
        .context("Failed to update database")?;
    Ok(db)
}

async fn update_db(db: &DatabaseConnection, cli: &Cli) -> Result<()> {
    let news_seeded = ENews::find().one(db).await?.is_some();

    if !news_seeded {
        let sample_news = [
            ANews {
                id: Set(Uuid::new_v4()),
                title: Set(
                    "Breakthrough in Natural Language Processing Sets New Benchmarks".to_string(),
                ),
                content: Set("Researchers have developed a new technique that dramatically \
                              improves AI understanding of complex language patterns, opening \
                              doors for more natural human-computer interaction."
                    .to_string()),
                image: Set(Some(
                    "https://images.unsplash.com/photo-1607799279861-4dd421887fb3".to_string(),
                )),
                category: Set("Research".to_string()),
                created_at: Set(Utc::now().naive_utc()),
            },
            ANews {
                id: Set(Uuid::new_v4()),
                title: Set("New International Framework for AI Governance Announced".to_string()),
                content: Set("Leading nations have agreed on a comprehensive framework for AI \
                              regulation that aims to balance innovation with ethical \
                              considerations and public safety."
                    .to_string()),
                image: Set(Some(
                    "https://images.unsplash.com/photo-1581092335867-bfc5aa5d2d95".to_string(),
                )),
                category: Set("Regulation".to_string()),
                created_at: Set(Utc::now().naive_utc()),
            },
        ];

        for anews in sample_news {
            anews.insert(db).await?;
        }
    }

    if let (Some(username), Some(email), Some(password_file)) = (
        cli.admin_username.as_ref(),
        cli.admin_email.as_ref(),
        cli.admin_password_file.as_ref(),
    ) {
        let admin = EUser::find()
            .filter(
                Condition::any()
                    .add(CUser::Username.eq(username.clone()))
                    .add(CUser::Email.eq(email.clone())),
            )
            .one(db)
            .await?;

        if admin.is_none() {
            let password = std::fs::read_to_string(password_file)
                .context("Failed to read admin password from file")?
                .trim()
                .to_string();

            if password.is_empty() {
                anyhow::bail!("Admin password file is empty");
            }

            let auser = AUser {
                id: Set(Uuid::new_v4()),
                username: Set(username.clone()),
                name: Set(username.clone()),
                email: Set(email.clone()),
                password: Set(generate_hash(password)),
                bio: Set(None),
                avatar: Set(None),
                role: Set(UserRole::Admin),
                last_login_at: Set(*NULL_TIME),
                created_at: Set(Utc::now().naive_utc()),
            };

            auser.insert(db).await?;
        }
    }

    Ok(())
}
