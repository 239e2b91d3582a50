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
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(integer(Address::EmployeeId))
                    .col(string(Address::Street))
                    .col(string(Address::ExteriorNumber))
                    .col(string_null(Address::InteriorNumber))
                    .col(string_null(Address::Neighborhood))
                    .col(string(Address::City))
                    .col(string(Address::State))
                    .col(string(Address::ZipCode))
                    .col(string(Address::Country))
                    .col(
                        timestamp(Address::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Address::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Address::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_employee_id")
                            .from(Address::Table, Address::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_live_unique_index(
            manager,
            "idx_address_employee_live",
            "address",
            &["employee_id"],
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    EmployeeId,
    Street,
    ExteriorNumber,
    InteriorNumber,
    Neighborhood,
    City,
    State,
    ZipCode,
    Country,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
