//! Factories for catalog tables referenced by employee records.
//!
//! Catalog rows rarely need customization in tests, so only convenience
//! functions are provided. Names are made unique with `next_id()`.

use crate::factory::helpers::next_id;
use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_shift(db: &DatabaseConnection) -> Result<entity::shift::Model, DbErr> {
    let now = Utc::now();

    entity::shift::ActiveModel {
        name: ActiveValue::Set(format!("Shift {}", next_id())),
        start_time: ActiveValue::Set(NaiveTime::from_hms_opt(7, 0, 0).unwrap()),
        end_time: ActiveValue::Set(NaiveTime::from_hms_opt(15, 0, 0).unwrap()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_bank(db: &DatabaseConnection) -> Result<entity::bank::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::bank::ActiveModel {
        name: ActiveValue::Set(format!("Bank {}", id)),
        code: ActiveValue::Set(format!("{:03}", id % 1000)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_medical_condition(
    db: &DatabaseConnection,
) -> Result<entity::medical_condition::Model, DbErr> {
    let now = Utc::now();

    entity::medical_condition::ActiveModel {
        name: ActiveValue::Set(format!("Condition {}", next_id())),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an exception type; `needs_description` controls whether requests of
/// this type must carry a description.
pub async fn create_exception_type(
    db: &DatabaseConnection,
    needs_description: bool,
) -> Result<entity::exception_type::Model, DbErr> {
    let now = Utc::now();

    entity::exception_type::ActiveModel {
        name: ActiveValue::Set(format!("Exception {}", next_id())),
        needs_description: ActiveValue::Set(needs_description),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
