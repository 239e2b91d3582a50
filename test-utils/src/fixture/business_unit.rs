use chrono::Utc;

/// Returns a live, active business unit model with default values.
pub fn entity() -> entity::business_unit::Model {
    entity_builder().build()
}

/// Creates a builder for a business unit model with default values.
pub fn entity_builder() -> BusinessUnitBuilder {
    let now = Utc::now();

    BusinessUnitBuilder {
        entity: entity::business_unit::Model {
            id: 1,
            name: "Operaciones Norte".to_string(),
            slug: "norte".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        },
    }
}

pub struct BusinessUnitBuilder {
    entity: entity::business_unit::Model,
}

impl BusinessUnitBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    pub fn build(self) -> entity::business_unit::Model {
        self.entity
    }
}
