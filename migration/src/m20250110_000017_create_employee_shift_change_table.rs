use sea_orm_migration::{prelude::*, schema::*};

use crate::create_live_unique_index;

use super::{
    m20250106_000004_create_employee_table::Employee,
    m20250110_000016_create_shift_table::Shift,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeShiftChange::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeShiftChange::Id))
                    .col(integer(EmployeeShiftChange::EmployeeIdFrom))
                    .col(integer(EmployeeShiftChange::ShiftIdFrom))
                    .col(date(EmployeeShiftChange::DateFrom))
                    .col(integer(EmployeeShiftChange::EmployeeIdTo))
                    .col(integer(EmployeeShiftChange::ShiftIdTo))
                    .col(date(EmployeeShiftChange::DateTo))
                    .col(boolean(EmployeeShiftChange::IsSwap).default(false))
                    .col(text_null(EmployeeShiftChange::Note))
                    .col(
                        timestamp(EmployeeShiftChange::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(EmployeeShiftChange::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(EmployeeShiftChange::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_shift_change_employee_from")
                            .from(EmployeeShiftChange::Table, EmployeeShiftChange::EmployeeIdFrom)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_shift_change_employee_to")
                            .from(EmployeeShiftChange::Table, EmployeeShiftChange::EmployeeIdTo)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_shift_change_shift_from")
                            .from(EmployeeShiftChange::Table, EmployeeShiftChange::ShiftIdFrom)
                            .to(Shift::Table, Shift::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_shift_change_shift_to")
                            .from(EmployeeShiftChange::Table, EmployeeShiftChange::ShiftIdTo)
                            .to(Shift::Table, Shift::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_employee_shift_change_from_live",
            "employee_shift_change",
            &["employee_id_from", "date_from"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeShiftChange::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeShiftChange {
    Table,
    Id,
    EmployeeIdFrom,
    ShiftIdFrom,
    DateFrom,
    EmployeeIdTo,
    ShiftIdTo,
    DateTo,
    IsSwap,
    Note,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
