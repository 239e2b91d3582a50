use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Payroll code, unique among live employees.
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<Date>,
    pub hire_date: Option<Date>,
    pub business_unit_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

impl Model {
    pub fn full_name(&self) -> String {
        match &self.second_last_name {
            Some(second) if !second.is_empty() => {
                format!("{} {} {}", self.first_name, self.last_name, second)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_unit::Entity",
        from = "Column::BusinessUnitId",
        to = "super::business_unit::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    BusinessUnit,
    #[sea_orm(has_many = "super::address::Entity")]
    Address,
}

impl Related<super::business_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessUnit.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
