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
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string(Employee::Code))
                    .col(string(Employee::FirstName))
                    .col(string(Employee::LastName))
                    .col(string_null(Employee::SecondLastName))
                    .col(string_null(Employee::Email))
                    .col(string_null(Employee::Phone))
                    .col(date_null(Employee::Birthday))
                    .col(date_null(Employee::HireDate))
                    .col(integer(Employee::BusinessUnitId))
                    .col(
                        timestamp(Employee::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Employee::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Employee::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_business_unit_id")
                            .from(Employee::Table, Employee::BusinessUnitId)
                            .to(BusinessUnit::Table, BusinessUnit::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_employee_code_live",
            "employee",
            &["code"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    Code,
    FirstName,
    LastName,
    SecondLastName,
    Email,
    Phone,
    Birthday,
    HireDate,
    BusinessUnitId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
