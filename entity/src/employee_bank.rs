use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bank account of an employee.
///
/// `account_number` and `clabe` hold AES-GCM ciphertext and are never
/// serialized; the `*_last_four` columns keep the trailing characters of the
/// plaintext for display.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_bank")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub bank_id: i32,
    #[serde(skip_serializing)]
    #[sea_orm(column_type = "Text")]
    pub account_number: String,
    pub account_number_last_four: String,
    #[serde(skip_serializing)]
    #[sea_orm(column_type = "Text", nullable)]
    pub clabe: Option<String>,
    pub clabe_last_four: Option<String>,
    pub currency: String,
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
        belongs_to = "super::bank::Entity",
        from = "Column::BankId",
        to = "super::bank::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Bank,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::bank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
