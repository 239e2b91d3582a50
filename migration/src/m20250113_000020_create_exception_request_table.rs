use sea_orm_migration::{prelude::*, schema::*};

use crate::create_live_unique_index;

use super::{
    m20250106_000004_create_employee_table::Employee,
    m20250113_000019_create_exception_type_table::ExceptionType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExceptionRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ExceptionRequest::Id))
                    .col(integer(ExceptionRequest::EmployeeId))
                    .col(integer(ExceptionRequest::ExceptionTypeId))
                    .col(date(ExceptionRequest::RequestedDate))
                    .col(text_null(ExceptionRequest::Description))
                    .col(string(ExceptionRequest::Status))
                    .col(
                        timestamp(ExceptionRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ExceptionRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(ExceptionRequest::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exception_request_employee_id")
                            .from(ExceptionRequest::Table, ExceptionRequest::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exception_request_exception_type_id")
                            .from(ExceptionRequest::Table, ExceptionRequest::ExceptionTypeId)
                            .to(ExceptionType::Table, ExceptionType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_exception_request_live",
            "exception_request",
            &["employee_id", "exception_type_id", "requested_date"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExceptionRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExceptionRequest {
    Table,
    Id,
    EmployeeId,
    ExceptionTypeId,
    RequestedDate,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
