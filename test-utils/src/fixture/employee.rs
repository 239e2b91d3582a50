use chrono::{NaiveDate, Utc};

/// Returns a live employee model with default values.
///
/// The default employee belongs to business unit `1` and has no birthday on file.
pub fn entity() -> entity::employee::Model {
    entity_builder().build()
}

/// Creates a builder for an employee model with default values.
pub fn entity_builder() -> EmployeeBuilder {
    let now = Utc::now();

    EmployeeBuilder {
        entity: entity::employee::Model {
            id: 1,
            code: "EMP-0001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "López".to_string(),
            second_last_name: None,
            email: None,
            phone: None,
            birthday: None,
            hire_date: None,
            business_unit_id: 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        },
    }
}

pub struct EmployeeBuilder {
    entity: entity::employee::Model,
}

impl EmployeeBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
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

    pub fn email(mut self, email: Option<String>) -> Self {
        self.entity.email = email;
        self
    }

    pub fn birthday(mut self, birthday: Option<NaiveDate>) -> Self {
        self.entity.birthday = birthday;
        self
    }

    pub fn business_unit_id(mut self, business_unit_id: i32) -> Self {
        self.entity.business_unit_id = business_unit_id;
        self
    }

    pub fn build(self) -> entity::employee::Model {
        self.entity
    }
}
