use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exception_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Requests of this type must carry a description.
    pub needs_description: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::exception_request::Entity")]
    ExceptionRequest,
}

impl Related<super::exception_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExceptionRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
