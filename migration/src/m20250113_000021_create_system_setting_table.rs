use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(SystemSetting::Id))
                    .col(string(SystemSetting::Key))
                    .col(text(SystemSetting::Value))
                    .col(string_null(SystemSetting::Description))
                    .col(
                        timestamp(SystemSetting::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(SystemSetting::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_system_setting_key")
                    .table(SystemSetting::Table)
                    .col(SystemSetting::Key)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SystemSetting {
    Table,
    Id,
    Key,
    Value,
    Description,
    CreatedAt,
    UpdatedAt,
}
