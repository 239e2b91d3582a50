use sea_orm::DatabaseConnection;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::action_log::ActionLogRepository,
    error::AppError,
    i18n::Locale,
    util::crypto::FieldCipher,
};

mod birthday;
mod proceeding_file;
mod resource;
mod shift_change;

fn cipher() -> FieldCipher {
    FieldCipher::new("test-app-key")
}

fn status_of(err: &AppError) -> Option<u16> {
    match err {
        AppError::Verification(verification) => Some(verification.status),
        _ => None,
    }
}

async fn audit_actions(db: &DatabaseConnection, table: &str, id: i32) -> Vec<String> {
    ActionLogRepository::new(db)
        .find_by_record(table, id)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.action)
        .collect()
}
