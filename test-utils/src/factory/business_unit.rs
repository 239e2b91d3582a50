//! Business unit factory.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating business units. Each instance receives a unique slug.
pub struct BusinessUnitFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::business_unit::Model,
}

impl<'a> BusinessUnitFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::business_unit::entity_builder()
            .name(format!("Business Unit {}", id))
            .slug(format!("unit-{}", id))
            .build();

        Self { db, entity }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::business_unit::Model, DbErr> {
        let now = Utc::now();

        entity::business_unit::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            slug: ActiveValue::Set(self.entity.slug),
            active: ActiveValue::Set(self.entity.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active business unit with a unique slug.
pub async fn create_business_unit(
    db: &DatabaseConnection,
) -> Result<entity::business_unit::Model, DbErr> {
    BusinessUnitFactory::new(db).build().await
}
