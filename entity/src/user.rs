use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Back-office user (HR staff, administrators).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Comma separated business unit slugs this user may see.
    pub business_access: String,
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

impl Model {
    /// Returns true when `slug` appears in the user's business access list.
    pub fn can_access(&self, slug: &str) -> bool {
        self.business_access
            .split(',')
            .map(str::trim)
            .any(|access| access.eq_ignore_ascii_case(slug))
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
