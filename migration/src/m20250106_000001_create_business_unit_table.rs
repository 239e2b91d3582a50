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
                    .table(BusinessUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessUnit::Id))
                    .col(string(BusinessUnit::Name))
                    .col(string(BusinessUnit::Slug))
                    .col(boolean(BusinessUnit::Active).default(true))
                    .col(
                        timestamp(BusinessUnit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BusinessUnit::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(BusinessUnit::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_business_unit_slug_live",
            "business_unit",
            &["slug"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessUnit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusinessUnit {
    Table,
    Id,
    Name,
    Slug,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
