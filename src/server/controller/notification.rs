use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chrono::Local;

use crate::{
    model::notification::RunBirthdayRemindersDto,
    server::{
        error::AppError, i18n::Locale, service::birthday::BirthdayReminderService,
        state::AppState, util::response::ApiResponse,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notifications/birthdays/run", post(run_birthday_reminders))
}

/// Runs the birthday reminder batch on demand.
///
/// The body is optional; `{ "date": "YYYY-MM-DD" }` evaluates another day.
///
/// # Returns
/// - `200 OK` - `{ employees, sent, failed }`
pub async fn run_birthday_reminders(
    State(state): State<AppState>,
    locale: Locale,
    payload: Result<Json<RunBirthdayRemindersDto>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => RunBirthdayRemindersDto::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let day = payload.date.unwrap_or_else(|| Local::now().date_naive());

    let report = BirthdayReminderService::new(&state.db, state.mailer.as_ref(), &state.config)
        .run(day)
        .await?;

    Ok(ApiResponse::ok(
        locale,
        locale
            .pick(
                "Recordatorios de cumpleaños procesados",
                "Birthday reminders processed",
            )
            .to_string(),
        serde_json::to_value(report)?,
    ))
}
