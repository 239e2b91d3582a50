use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exception_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub exception_type_id: i32,
    pub requested_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// `requested`, `accepted` or `refused`
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::exception_type::Entity",
        from = "Column::ExceptionTypeId",
        to = "super::exception_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ExceptionType,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::exception_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExceptionType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
