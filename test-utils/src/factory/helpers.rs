//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a business unit and one employee belonging to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((business_unit, employee))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_employee_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::business_unit::Model, entity::employee::Model), DbErr> {
    let unit = crate::factory::business_unit::create_business_unit(db).await?;
    let employee = crate::factory::employee::create_employee(db, unit.id).await?;

    Ok((unit, employee))
}
