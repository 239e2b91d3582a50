//! Generic CRUD handlers, instantiated once per [`Resource`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};

use crate::{
    model::{api::IndexQueryDto, validation::Validate},
    server::{
        data::resource::Resource,
        error::AppError,
        i18n::{Locale, Message},
        middleware::auth::Actor,
        service::resource::ResourceService,
        state::AppState,
        util::response::ApiResponse,
    },
};

/// Standard routes of a resource: `GET|POST {PATH}` and
/// `GET|PUT|DELETE {PATH}/{id}`.
pub fn routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(R::PATH, get(index::<R>).post(store::<R>))
        .route(
            &format!("{}/{{id}}", R::PATH),
            get(show::<R>).put(update::<R>).delete(destroy::<R>),
        )
}

/// Paginated list of live records.
///
/// # Returns
/// - `200 OK` - `{ meta, data }` page
/// - `400 Bad Request` - Malformed query string
pub async fn index<R: Resource>(
    State(state): State<AppState>,
    locale: Locale,
    query: Result<Query<IndexQueryDto>, QueryRejection>,
) -> Result<ApiResponse, AppError> {
    let Query(query) = query?;
    let service = ResourceService::<R>::new(&state.db, &state.cipher, locale);

    let mut page = service.index(&query).await?;
    let items = std::mem::take(&mut page.items);
    let data = serde_json::to_value(page.into_dto(items))?;

    Ok(ApiResponse::ok(locale, service.message(Message::Listed), data))
}

/// Validates and stores a new record.
///
/// # Returns
/// - `201 Created` - Stored record
/// - `400 Bad Request` - Unparseable body or business rule rejected
/// - `404 Not Found` - A referenced record does not exist
/// - `409 Conflict` - A live record already holds the same business key
/// - `422 Unprocessable Entity` - A field rule failed
pub async fn store<R: Resource>(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    payload: Result<Json<R::Create>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let service = ResourceService::<R>::new(&state.db, &state.cipher, locale);
    let model = service.create(payload, actor.user()).await?;

    Ok(ApiResponse::created(
        locale,
        service.message(Message::Created),
        service.present(model).await?,
    ))
}

pub async fn show<R: Resource>(
    State(state): State<AppState>,
    locale: Locale,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(id) = id?;
    let service = ResourceService::<R>::new(&state.db, &state.cipher, locale);
    let model = service.show(id).await?;

    Ok(ApiResponse::ok(
        locale,
        service.message(Message::Found),
        service.present(model).await?,
    ))
}

/// Applies a partial update; omitted fields keep their stored values.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<R::Update>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let service = ResourceService::<R>::new(&state.db, &state.cipher, locale);
    let model = service.update(id, payload, actor.user()).await?;

    Ok(ApiResponse::ok(
        locale,
        service.message(Message::Updated),
        service.present(model).await?,
    ))
}

pub async fn destroy<R: Resource>(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(id) = id?;
    let service = ResourceService::<R>::new(&state.db, &state.cipher, locale);
    let model = service.delete(id, actor.user()).await?;

    Ok(ApiResponse::ok(
        locale,
        service.message(Message::Deleted),
        serde_json::to_value(model)?,
    ))
}
