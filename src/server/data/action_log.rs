use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::action_log::CreateActionLogParams;

/// Append-only access to the audit trail.
///
/// Generic over the connection so entries can be written inside the same
/// transaction as the change they describe.
pub struct ActionLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActionLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an audit entry.
    ///
    /// # Arguments
    /// - `params` - Actor, action, affected row and snapshot
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateActionLogParams,
    ) -> Result<entity::action_log::Model, DbErr> {
        let now = Utc::now();

        entity::action_log::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            action: ActiveValue::Set(params.action.as_str().to_string()),
            table_name: ActiveValue::Set(params.table_name),
            record_id: ActiveValue::Set(params.record_id),
            snapshot: ActiveValue::Set(params.snapshot),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every entry recorded for one row, oldest first.
    pub async fn find_by_record(
        &self,
        table_name: &str,
        record_id: i32,
    ) -> Result<Vec<entity::action_log::Model>, DbErr> {
        entity::prelude::ActionLog::find()
            .filter(entity::action_log::Column::TableName.eq(table_name))
            .filter(entity::action_log::Column::RecordId.eq(record_id))
            .order_by_asc(entity::action_log::Column::Id)
            .all(self.db)
            .await
    }
}
