mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::birthday_reminder, startup,
    state::AppState, util::crypto::FieldCipher,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let storage = startup::setup_file_storage(&config)?;
    let mailer = startup::setup_mailer(&config)?;
    let cipher = FieldCipher::new(&config.app_key);
    let bind_address = config.bind_address.clone();

    let state = AppState::new(db, storage, mailer, cipher, config);

    // Start birthday reminder scheduler
    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = birthday_reminder::start_scheduler(scheduler_state).await {
            tracing::error!("Birthday reminder scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
