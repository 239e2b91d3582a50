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
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(pk_auto(Airport::Id))
                    .col(string(Airport::Name))
                    .col(string(Airport::IataCode))
                    .col(string_null(Airport::IcaoCode))
                    .col(string_null(Airport::City))
                    .col(string_null(Airport::Country))
                    .col(
                        timestamp(Airport::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Airport::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Airport::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_airport_iata_live",
            "airport",
            &["iata_code"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airport {
    Table,
    Id,
    Name,
    IataCode,
    IcaoCode,
    City,
    Country,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
