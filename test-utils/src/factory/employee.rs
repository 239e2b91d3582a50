//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// Defaults are sourced from `fixture::employee::entity()` with a unique payroll code.
///
/// # Example
///
/// ```rust,ignore
/// let employee = EmployeeFactory::new(&db, unit.id)
///     .birthday(NaiveDate::from_ymd_opt(1990, 5, 17))
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::employee::Model,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory for the given business unit.
    pub fn new(db: &'a DatabaseConnection, business_unit_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::employee::entity_builder()
            .code(format!("EMP-{:05}", id))
            .first_name(format!("Employee {}", id))
            .business_unit_id(business_unit_id)
            .build();

        Self { db, entity }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.entity.code = code.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn birthday(mut self, birthday: Option<NaiveDate>) -> Self {
        self.entity.birthday = birthday;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = Some(email.into());
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now();

        entity::employee::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.entity.code),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            second_last_name: ActiveValue::Set(self.entity.second_last_name),
            email: ActiveValue::Set(self.entity.email),
            phone: ActiveValue::Set(self.entity.phone),
            birthday: ActiveValue::Set(self.entity.birthday),
            hire_date: ActiveValue::Set(self.entity.hire_date),
            business_unit_id: ActiveValue::Set(self.entity.business_unit_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values in the given business unit.
pub async fn create_employee(
    db: &DatabaseConnection,
    business_unit_id: i32,
) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db, business_unit_id).build().await
}
