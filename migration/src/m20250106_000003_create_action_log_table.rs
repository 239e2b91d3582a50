use sea_orm_migration::{prelude::*, schema::*};

use super::m20250106_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActionLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActionLog::Id))
                    .col(integer(ActionLog::UserId))
                    .col(string(ActionLog::Action))
                    .col(string(ActionLog::TableName))
                    .col(integer(ActionLog::RecordId))
                    .col(text(ActionLog::Snapshot))
                    .col(
                        timestamp(ActionLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ActionLog::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_action_log_user_id")
                            .from(ActionLog::Table, ActionLog::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActionLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActionLog {
    Table,
    Id,
    UserId,
    Action,
    TableName,
    RecordId,
    Snapshot,
    CreatedAt,
    UpdatedAt,
}
