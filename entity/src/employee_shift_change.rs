use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One side of a shift exchange between two employees.
///
/// A swap is stored as two rows where the second mirrors the first:
/// `(from, to)` becomes `(to, from)`, including shifts and dates.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_shift_change")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id_from: i32,
    pub shift_id_from: i32,
    pub date_from: Date,
    pub employee_id_to: i32,
    pub shift_id_to: i32,
    pub date_to: Date,
    pub is_swap: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeIdFrom",
        to = "super::employee::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EmployeeFrom,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeIdTo",
        to = "super::employee::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EmployeeTo,
}

impl ActiveModelBehavior for ActiveModel {}
