pub use sea_orm_migration::prelude::*;

use sea_orm_migration::sea_orm::ConnectionTrait;

mod m20250106_000001_create_business_unit_table;
mod m20250106_000002_create_user_table;
mod m20250106_000003_create_action_log_table;
mod m20250106_000004_create_employee_table;
mod m20250106_000005_create_address_table;
mod m20250107_000006_create_aircraft_table;
mod m20250107_000007_create_aircraft_pilot_table;
mod m20250107_000008_create_airport_table;
mod m20250108_000009_create_bank_table;
mod m20250108_000010_create_employee_bank_table;
mod m20250108_000011_create_employee_child_table;
mod m20250108_000012_create_employee_spouse_table;
mod m20250109_000013_create_medical_condition_table;
mod m20250109_000014_create_employee_medical_condition_table;
mod m20250109_000015_create_proceeding_file_table;
mod m20250110_000016_create_shift_table;
mod m20250110_000017_create_employee_shift_change_table;
mod m20250110_000018_create_work_disability_table;
mod m20250113_000019_create_exception_type_table;
mod m20250113_000020_create_exception_request_table;
mod m20250113_000021_create_system_setting_table;
mod m20250113_000022_create_notification_email_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250106_000001_create_business_unit_table::Migration),
            Box::new(m20250106_000002_create_user_table::Migration),
            Box::new(m20250106_000003_create_action_log_table::Migration),
            Box::new(m20250106_000004_create_employee_table::Migration),
            Box::new(m20250106_000005_create_address_table::Migration),
            Box::new(m20250107_000006_create_aircraft_table::Migration),
            Box::new(m20250107_000007_create_aircraft_pilot_table::Migration),
            Box::new(m20250107_000008_create_airport_table::Migration),
            Box::new(m20250108_000009_create_bank_table::Migration),
            Box::new(m20250108_000010_create_employee_bank_table::Migration),
            Box::new(m20250108_000011_create_employee_child_table::Migration),
            Box::new(m20250108_000012_create_employee_spouse_table::Migration),
            Box::new(m20250109_000013_create_medical_condition_table::Migration),
            Box::new(m20250109_000014_create_employee_medical_condition_table::Migration),
            Box::new(m20250109_000015_create_proceeding_file_table::Migration),
            Box::new(m20250110_000016_create_shift_table::Migration),
            Box::new(m20250110_000017_create_employee_shift_change_table::Migration),
            Box::new(m20250110_000018_create_work_disability_table::Migration),
            Box::new(m20250113_000019_create_exception_type_table::Migration),
            Box::new(m20250113_000020_create_exception_request_table::Migration),
            Box::new(m20250113_000021_create_system_setting_table::Migration),
            Box::new(m20250113_000022_create_notification_email_table::Migration),
        ]
    }
}

/// Creates a unique index that only covers live rows (`deleted_at IS NULL`),
/// so a soft-deleted record never blocks re-creating the same business key.
///
/// Partial indexes are not expressible through the schema builder, so the
/// statement is issued as raw SQL. The syntax is shared by SQLite and Postgres.
pub(crate) async fn create_live_unique_index(
    manager: &SchemaManager<'_>,
    name: &str,
    table: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let columns = columns
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");

    manager
        .get_connection()
        .execute_unprepared(&format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS \"{}\" ON \"{}\" ({}) WHERE \"deleted_at\" IS NULL",
            name, table, columns
        ))
        .await?;

    Ok(())
}
