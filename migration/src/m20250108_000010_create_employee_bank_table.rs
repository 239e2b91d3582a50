use sea_orm_migration::{prelude::*, schema::*};

use crate::create_live_unique_index;

use super::{
    m20250106_000004_create_employee_table::Employee,
    m20250108_000009_create_bank_table::Bank,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeBank::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeBank::Id))
                    .col(integer(EmployeeBank::EmployeeId))
                    .col(integer(EmployeeBank::BankId))
                    .col(text(EmployeeBank::AccountNumber))
                    .col(string(EmployeeBank::AccountNumberLastFour))
                    .col(text_null(EmployeeBank::Clabe))
                    .col(string_null(EmployeeBank::ClabeLastFour))
                    .col(string(EmployeeBank::Currency))
                    .col(
                        timestamp(EmployeeBank::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(EmployeeBank::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(EmployeeBank::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_bank_employee_id")
                            .from(EmployeeBank::Table, EmployeeBank::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_bank_bank_id")
                            .from(EmployeeBank::Table, EmployeeBank::BankId)
                            .to(Bank::Table, Bank::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_employee_bank_pair_live",
            "employee_bank",
            &["employee_id", "bank_id"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeBank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeBank {
    Table,
    Id,
    EmployeeId,
    BankId,
    AccountNumber,
    AccountNumberLastFour,
    Clabe,
    ClabeLastFour,
    Currency,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
