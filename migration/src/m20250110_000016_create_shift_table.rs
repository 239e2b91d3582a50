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
                    .table(Shift::Table)
                    .if_not_exists()
                    .col(pk_auto(Shift::Id))
                    .col(string(Shift::Name))
                    .col(time(Shift::StartTime))
                    .col(time(Shift::EndTime))
                    .col(
                        timestamp(Shift::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Shift::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Shift::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_shift_name_live",
            "shift",
            &["name"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shift::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shift {
    Table,
    Id,
    Name,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
