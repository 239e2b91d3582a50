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
                    .table(EmployeeSpouse::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeSpouse::Id))
                    .col(integer(EmployeeSpouse::EmployeeId))
                    .col(string(EmployeeSpouse::FirstName))
                    .col(string(EmployeeSpouse::LastName))
                    .col(string_null(EmployeeSpouse::Gender))
                    .col(date_null(EmployeeSpouse::Birthday))
                    .col(string_null(EmployeeSpouse::Phone))
                    .col(
                        timestamp(EmployeeSpouse::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(EmployeeSpouse::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(EmployeeSpouse::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_spouse_employee_id")
                            .from(EmployeeSpouse::Table, EmployeeSpouse::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_employee_spouse_live",
            "employee_spouse",
            &["employee_id"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeSpouse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeSpouse {
    Table,
    Id,
    EmployeeId,
    FirstName,
    LastName,
    Gender,
    Birthday,
    Phone,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
