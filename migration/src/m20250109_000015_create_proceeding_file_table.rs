use sea_orm_migration::{prelude::*, schema::*};

use super::m20250106_000004_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProceedingFile::Table)
                    .if_not_exists()
                    .col(pk_auto(ProceedingFile::Id))
                    .col(integer(ProceedingFile::EmployeeId))
                    .col(string(ProceedingFile::Name))
                    .col(text_null(ProceedingFile::Description))
                    .col(string_null(ProceedingFile::FileUrl))
                    .col(date_null(ProceedingFile::ExpirationAt))
                    .col(
                        timestamp(ProceedingFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ProceedingFile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(ProceedingFile::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_proceeding_file_employee_id")
                            .from(ProceedingFile::Table, ProceedingFile::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProceedingFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProceedingFile {
    Table,
    Id,
    EmployeeId,
    Name,
    Description,
    FileUrl,
    ExpirationAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
