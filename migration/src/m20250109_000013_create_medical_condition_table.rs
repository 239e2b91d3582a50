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
                    .table(MedicalCondition::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicalCondition::Id))
                    .col(string(MedicalCondition::Name))
                    .col(text_null(MedicalCondition::Description))
                    .col(
                        timestamp(MedicalCondition::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MedicalCondition::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(MedicalCondition::DeletedAt))
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_medical_condition_name_live",
            "medical_condition",
            &["name"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalCondition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MedicalCondition {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
