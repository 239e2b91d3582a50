//! User factory for back-office (HR) users.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating users. Defaults to an `rh` user with a unique email.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::user::entity_builder()
            .name(format!("User {}", id))
            .email(format!("user{}@example.com", id))
            .build();

        Self { db, entity }
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

    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.entity.api_token = Some(api_token.into());
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            email: ActiveValue::Set(self.entity.email),
            role: ActiveValue::Set(self.entity.role),
            business_access: ActiveValue::Set(self.entity.business_access),
            api_token: ActiveValue::Set(self.entity.api_token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an HR user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
