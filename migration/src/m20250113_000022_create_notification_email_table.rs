use sea_orm_migration::{prelude::*, schema::*};

use crate::create_live_unique_index;

use super::m20250106_000001_create_business_unit_table::BusinessUnit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationEmail::Table)
                    .if_not_exists()
                    .col(pk_auto(NotificationEmail::Id))
                    .col(string(NotificationEmail::Email))
                    .col(integer(NotificationEmail::BusinessUnitId))
                    .col(string(NotificationEmail::Kind))
                    .col(
                        timestamp(NotificationEmail::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(NotificationEmail::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(NotificationEmail::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_email_business_unit_id")
                            .from(NotificationEmail::Table, NotificationEmail::BusinessUnitId)
                            .to(BusinessUnit::Table, BusinessUnit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_notification_email_live",
            "notification_email",
            &["email", "business_unit_id", "kind"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationEmail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationEmail {
    Table,
    Id,
    Email,
    BusinessUnitId,
    Kind,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
