use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::server::{
    data::action_log::ActionLogRepository,
    error::AppError,
    model::action_log::{AuditAction, CreateActionLogParams},
};

pub struct ActionLogService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActionLogService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records `action` on a row when the request carries an identified actor.
    ///
    /// Anonymous requests are not audited.
    ///
    /// # Arguments
    /// - `actor` - User performing the change, if known
    /// - `action` - What happened to the row
    /// - `table_name` - Table of the affected row
    /// - `record_id` - Id of the affected row
    /// - `snapshot` - Row as it stands after the action
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Entry written
    /// - `Ok(None)` - No actor, nothing written
    /// - `Err(AppError)` - Serialization or database failure
    pub async fn save_action_on_log<T: Serialize + Sync>(
        &self,
        actor: Option<&entity::user::Model>,
        action: AuditAction,
        table_name: &str,
        record_id: i32,
        snapshot: &T,
    ) -> Result<Option<entity::action_log::Model>, AppError> {
        let Some(actor) = actor else {
            return Ok(None);
        };

        let entry = ActionLogRepository::new(self.db)
            .create(CreateActionLogParams {
                user_id: actor.id,
                action,
                table_name: table_name.to_string(),
                record_id,
                snapshot: serde_json::to_string(snapshot)?,
            })
            .await?;

        Ok(Some(entry))
    }
}
