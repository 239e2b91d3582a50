//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Object storage for uploaded files
//! - Mailer for outgoing notifications
//! - Field cipher for encrypted bank columns
//! - The process configuration

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    external::{mail::Mailer, storage::FileStorage},
    util::crypto::FieldCipher,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// collaborators are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Object storage used by proceeding file uploads.
    pub storage: Arc<dyn FileStorage>,

    /// Mail relay used by the birthday reminder job.
    pub mailer: Arc<dyn Mailer>,

    /// Cipher for account number and CLABE columns.
    pub cipher: Arc<FieldCipher>,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - File storage backend
    /// - `mailer` - Outgoing mail transport
    /// - `cipher` - Field cipher derived from `APP_KEY`
    /// - `config` - Process configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        storage: Arc<dyn FileStorage>,
        mailer: Arc<dyn Mailer>,
        cipher: FieldCipher,
        config: Config,
    ) -> Self {
        Self {
            db,
            storage,
            mailer,
            cipher: Arc::new(cipher),
            config: Arc::new(config),
        }
    }
}
