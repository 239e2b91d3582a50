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
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string(User::Email))
                    .col(string(User::Role))
                    .col(string(User::BusinessAccess))
                    .col(string_null(User::ApiToken))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(User::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_user_email_live",
            "user",
            &["email"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Role,
    BusinessAccess,
    ApiToken,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
