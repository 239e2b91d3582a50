use sea_orm_migration::{prelude::*, schema::*};

use crate::create_live_unique_index;

use super::{
    m20250106_000004_create_employee_table::Employee,
    m20250109_000013_create_medical_condition_table::MedicalCondition,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeMedicalCondition::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeMedicalCondition::Id))
                    .col(integer(EmployeeMedicalCondition::EmployeeId))
                    .col(integer(EmployeeMedicalCondition::MedicalConditionId))
                    .col(text_null(EmployeeMedicalCondition::Notes))
                    .col(
                        timestamp(EmployeeMedicalCondition::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(EmployeeMedicalCondition::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(EmployeeMedicalCondition::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_medical_condition_employee_id")
                            .from(EmployeeMedicalCondition::Table, EmployeeMedicalCondition::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_medical_condition_condition_id")
                            .from(EmployeeMedicalCondition::Table, EmployeeMedicalCondition::MedicalConditionId)
                            .to(MedicalCondition::Table, MedicalCondition::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_employee_medical_condition_pair_live",
            "employee_medical_condition",
            &["employee_id", "medical_condition_id"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeMedicalCondition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeMedicalCondition {
    Table,
    Id,
    EmployeeId,
    MedicalConditionId,
    Notes,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
