//! Crew assignments nested under an aircraft.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{delete, get},
    Json, Router,
};

use crate::{
    model::{
        aviation::{AssignPilotDto, CreateAircraftPilotDto},
        validation::Validate,
    },
    server::{
        data::{
            aircraft::AircraftResource,
            aircraft_pilot::{self, AircraftPilotRepository, AircraftPilotResource},
        },
        error::AppError,
        i18n::{Locale, Message},
        middleware::auth::Actor,
        service::resource::ResourceService,
        state::AppState,
        util::response::ApiResponse,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/aircraft/{id}/pilots",
            get(list_pilots).post(assign_pilot),
        )
        .route(
            "/api/aircraft/{id}/pilots/{pilot_id}",
            delete(remove_pilot),
        )
}

/// Pilots assigned to an aircraft.
///
/// # Returns
/// - `200 OK` - Assignments ordered by id
/// - `404 Not Found` - No live aircraft with that id
pub async fn list_pilots(
    State(state): State<AppState>,
    locale: Locale,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(aircraft_id) = id?;
    ResourceService::<AircraftResource>::new(&state.db, &state.cipher, locale)
        .show(aircraft_id)
        .await?;

    let pilots = AircraftPilotRepository::new(&state.db)
        .find_by_aircraft(aircraft_id)
        .await?;

    Ok(ApiResponse::ok(
        locale,
        locale.message(Message::Listed, aircraft_pilot::LABEL),
        serde_json::to_value(pilots)?,
    ))
}

/// Assigns an employee to an aircraft as pilot or copilot.
///
/// # Returns
/// - `201 Created` - New assignment
/// - `404 Not Found` - Aircraft or employee missing
/// - `409 Conflict` - Employee already assigned to this aircraft
pub async fn assign_pilot(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AssignPilotDto>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(aircraft_id) = id?;
    let Json(payload) = payload?;

    let input = CreateAircraftPilotDto::new(aircraft_id, payload);
    input.validate()?;

    let service = ResourceService::<AircraftPilotResource>::new(&state.db, &state.cipher, locale);
    let pilot = service.create(input, actor.user()).await?;

    Ok(ApiResponse::created(
        locale,
        service.message(Message::Created),
        serde_json::to_value(pilot)?,
    ))
}

pub async fn remove_pilot(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    ids: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<ApiResponse, AppError> {
    let Path((aircraft_id, pilot_id)) = ids?;

    let service = ResourceService::<AircraftPilotResource>::new(&state.db, &state.cipher, locale);
    let pilot = service.show(pilot_id).await?;
    if pilot.aircraft_id != aircraft_id {
        return Err(AppError::NotFound(service.message(Message::NotFound)));
    }

    let removed = service.delete(pilot.id, actor.user()).await?;

    Ok(ApiResponse::ok(
        locale,
        service.message(Message::Deleted),
        serde_json::to_value(removed)?,
    ))
}
