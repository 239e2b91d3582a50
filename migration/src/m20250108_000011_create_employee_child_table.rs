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
                    .table(EmployeeChild::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeChild::Id))
                    .col(integer(EmployeeChild::EmployeeId))
                    .col(string(EmployeeChild::FirstName))
                    .col(string(EmployeeChild::LastName))
                    .col(string_null(EmployeeChild::Gender))
                    .col(date(EmployeeChild::Birthday))
                    .col(
                        timestamp(EmployeeChild::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(EmployeeChild::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(EmployeeChild::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_child_employee_id")
                            .from(EmployeeChild::Table, EmployeeChild::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_employee_child_live",
            "employee_child",
            &["employee_id", "first_name", "birthday"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeChild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeChild {
    Table,
    Id,
    EmployeeId,
    FirstName,
    LastName,
    Gender,
    Birthday,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
