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
                    .table(ExceptionType::Table)
                    .if_not_exists()
                    .col(pk_auto(ExceptionType::Id))
                    .col(string(ExceptionType::Name))
                    .col(boolean(ExceptionType::NeedsDescription).default(false))
                    .col(
                        timestamp(ExceptionType::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ExceptionType::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(ExceptionType::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_exception_type_name_live",
            "exception_type",
            &["name"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExceptionType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExceptionType {
    Table,
    Id,
    Name,
    NeedsDescription,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
