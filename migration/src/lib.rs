/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250310_141200_create_table_user;
mod m20250310_142030_create_table_product;
mod m20250310_142815_create_table_project;
mod m20250310_143138_create_table_message;
mod m20250310_143500_create_table_news;
mod m20250310_143722_create_table_waitlist;
mod m20250616_000000_add_verification_to_product;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_141200_create_table_user::Migration),
            Box::new(m20250310_142030_create_table_product::Migration),
            Box::new(m20250310_142815_create_table_project::Migration),
            Box::new(m20250310_143138_create_table_message::Migration),
            Box::new(m20250310_143500_create_table_news::Migration),
            Box::new(m20250310_143722_create_table_waitlist::Migration),
            Box::new(m20250616_000000_add_verification_to_product::Migration),
        ]
    }
}
