use sea_orm_migration::{prelude::*, schema::*};

use crate::create_live_unique_index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(Aircraft::Id))
                    .col(string(Aircraft::Registration))
                    .col(string(Aircraft::Model))
                    .col(string_null(Aircraft::SerialNumber))
                    .col(boolean(Aircraft::Active).default(true))
                    .col(
                        timestamp(Aircraft::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Aircraft::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Aircraft::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_aircraft_registration_live",
            "aircraft",
            &["registration"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    Registration,
    Model,
    SerialNumber,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
