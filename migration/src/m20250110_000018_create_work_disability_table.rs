use sea_orm_migration::{prelude::*, schema::*};

use crate::create_live_unique_index;

use super::m20250106_000004_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkDisability::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkDisability::Id))
                    .col(integer(WorkDisability::EmployeeId))
                    .col(string(WorkDisability::InsuranceFolio))
                    .col(string(WorkDisability::DisabilityType))
                    .col(date(WorkDisability::StartDate))
                    .col(date(WorkDisability::EndDate))
                    .col(text_null(WorkDisability::Description))
                    .col(
                        timestamp(WorkDisability::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(WorkDisability::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(WorkDisability::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_disability_employee_id")
                            .from(WorkDisability::Table, WorkDisability::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_work_disability_folio_live",
            "work_disability",
            &["insurance_folio"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkDisability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkDisability {
    Table,
    Id,
    EmployeeId,
    InsuranceFolio,
    DisabilityType,
    StartDate,
    EndDate,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
