use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    external::{
        mail::{HttpMailer, Mailer},
        storage::{FileStorage, ObjectFileStorage},
    },
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema, including the partial unique
/// indexes backing conflict checks, is up-to-date before the server accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the S3 backed file storage.
pub fn setup_file_storage(config: &Config) -> Result<Arc<dyn FileStorage>, AppError> {
    Ok(Arc::new(ObjectFileStorage::s3(&config.storage)?))
}

/// Builds the HTTP mail relay client.
///
/// Redirects are disabled so the relay URL cannot bounce requests elsewhere.
pub fn setup_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(crate::server::error::mail::MailError::from)?;

    Ok(Arc::new(HttpMailer::new(client, &config.mail)))
}
