use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250106_000004_create_employee_table::Employee,
    m20250107_000006_create_aircraft_table::Aircraft,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AircraftPilot::Table)
                    .if_not_exists()
                    .col(pk_auto(AircraftPilot::Id))
                    .col(integer(AircraftPilot::AircraftId))
                    .col(integer(AircraftPilot::EmployeeId))
                    .col(string(AircraftPilot::Role))
                    .col(
                        timestamp(AircraftPilot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(AircraftPilot::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircraft_pilot_aircraft_id")
                            .from(AircraftPilot::Table, AircraftPilot::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircraft_pilot_employee_id")
                            .from(AircraftPilot::Table, AircraftPilot::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aircraft_pilot_pair")
                    .table(AircraftPilot::Table)
                    .col(AircraftPilot::AircraftId)
                    .col(AircraftPilot::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AircraftPilot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AircraftPilot {
    Table,
    Id,
    AircraftId,
    EmployeeId,
    Role,
    CreatedAt,
    UpdatedAt,
}
