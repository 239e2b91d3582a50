use chrono::Utc;

/// Returns an HR user model with access to the `norte` business unit.
pub fn entity() -> entity::user::Model {
    entity_builder().build()
}

/// Creates a builder for a user model with default values.
pub fn entity_builder() -> UserBuilder {
    let now = Utc::now();

    UserBuilder {
        entity: entity::user::Model {
            id: 1,
            name: "Recursos Humanos".to_string(),
            email: "rh@example.com".to_string(),
            role: "rh".to_string(),
            business_access: "norte".to_string(),
            api_token: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        },
    }
}

pub struct UserBuilder {
    entity: entity::user::Model,
}

impl UserBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = role.into();
        self
    }

    pub fn business_access(mut self, business_access: impl Into<String>) -> Self {
        self.entity.business_access = business_access.into();
        self
    }

    pub fn api_token(mut self, api_token: Option<String>) -> Self {
        self.entity.api_token = api_token;
        self
    }

    pub fn build(self) -> entity::user::Model {
        self.entity
    }
}
