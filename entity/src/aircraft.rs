use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub registration: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aircraft_pilot::Entity")]
    AircraftPilot,
}

impl Related<super::aircraft_pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftPilot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
