use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};

use crate::{
    model::{shift_change::CreateShiftChangeDto, validation::Validate},
    server::{
        controller::resource,
        data::{
            resource::Resource,
            shift_change::{ShiftChangeResource, LABEL},
        },
        error::AppError,
        i18n::{Locale, Message},
        middleware::auth::Actor,
        service::shift_change::ShiftChangeService,
        state::AppState,
        util::response::ApiResponse,
    },
};

/// Listing, lookup and note edits use the generic handlers; creating and
/// deleting handle both sides of a swap.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            ShiftChangeResource::PATH,
            get(resource::index::<ShiftChangeResource>).post(store),
        )
        .route(
            &format!("{}/{{id}}", ShiftChangeResource::PATH),
            get(resource::show::<ShiftChangeResource>)
                .put(resource::update::<ShiftChangeResource>)
                .delete(destroy),
        )
}

/// Records a shift change and, for a swap, its mirrored row.
///
/// # Returns
/// - `201 Created` - Array with the stored row, then its mirror
/// - `400 Bad Request` - Both sides name the same employee
/// - `404 Not Found` - Employee or shift missing
/// - `409 Conflict` - A side already has a shift change that day
/// - `422 Unprocessable Entity` - A field rule failed
pub async fn store(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    payload: Result<Json<CreateShiftChangeDto>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = ShiftChangeService::new(&state.db, locale)
        .create(payload, actor.user())
        .await?;

    Ok(ApiResponse::created(
        locale,
        locale.message(Message::Created, LABEL),
        serde_json::to_value(created)?,
    ))
}

/// Deletes a shift change together with its mirror.
pub async fn destroy(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(id) = id?;

    let deleted = ShiftChangeService::new(&state.db, locale)
        .delete(id, actor.user())
        .await?;

    Ok(ApiResponse::ok(
        locale,
        locale.message(Message::Deleted, LABEL),
        serde_json::to_value(deleted)?,
    ))
}
