use chrono::Local;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError, service::birthday::BirthdayReminderService, state::AppState,
};

/// Starts the birthday reminder scheduler
///
/// Runs the reminder batch for the current local day on the `BIRTHDAY_CRON`
/// schedule (six fields, seconds first, evaluated in UTC).
///
/// # Arguments
/// - `state`: Application state providing the database, mailer and configuration
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cron = state.config.birthday_cron.clone();
    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            if let Err(e) = send_birthday_reminders(&state).await {
                tracing::error!("Error sending birthday reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Birthday reminder scheduler started ({})", cron);

    Ok(())
}

async fn send_birthday_reminders(state: &AppState) -> Result<(), AppError> {
    let today = Local::now().date_naive();

    let report = BirthdayReminderService::new(&state.db, state.mailer.as_ref(), &state.config)
        .run(today)
        .await?;

    tracing::info!(
        "Birthday reminders for {}: {} employee(s), {} sent, {} failed",
        today,
        report.employees,
        report.sent,
        report.failed
    );

    Ok(())
}
