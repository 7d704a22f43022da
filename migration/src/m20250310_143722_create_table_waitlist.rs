/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Waitlist::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Waitlist::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Waitlist::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Waitlist::Name).string().null())
                    .col(ColumnDef::new(Waitlist::Interest).string().null())
                    .col(
                        ColumnDef::new(Waitlist::Newsletter)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Waitlist::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Waitlist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Waitlist {
    Table,
    Id,
    Email,
    Name,
    Interest,
    Newsletter,
    CreatedAt,
}
