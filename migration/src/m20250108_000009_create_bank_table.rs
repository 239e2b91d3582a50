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
                    .table(Bank::Table)
                    .if_not_exists()
                    .col(pk_auto(Bank::Id))
                    .col(string(Bank::Name))
                    .col(string(Bank::Code))
                    .col(
                        timestamp(Bank::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Bank::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Bank::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_bank_code_live",
            "bank",
            &["code"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bank {
    Table,
    Id,
    Name,
    Code,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
