//! Proceeding files are submitted as `multipart/form-data` with an optional
//! `file` part.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::PathRejection,
        Multipart, Path, State,
    },
    routing::get,
    Router,
};

use crate::server::{
    controller::resource,
    data::{proceeding_file::ProceedingFileResource, resource::Resource},
    error::AppError,
    i18n::{Locale, Message},
    middleware::auth::Actor,
    model::proceeding_file::ProceedingFileSubmission,
    service::proceeding_file::ProceedingFileService,
    state::AppState,
    util::{multipart::MultipartForm, response::ApiResponse},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            ProceedingFileResource::PATH,
            get(resource::index::<ProceedingFileResource>).post(store),
        )
        .route(
            &format!("{}/{{id}}", ProceedingFileResource::PATH),
            get(resource::show::<ProceedingFileResource>)
                .put(update)
                .delete(resource::destroy::<ProceedingFileResource>),
        )
}

/// Creates a proceeding file from a description, a document or both.
///
/// # Returns
/// - `201 Created` - Stored record, `file_url` set when a document was sent
/// - `400 Bad Request` - Neither description nor document, or a document type
///   that is not accepted
/// - `404 Not Found` - Employee missing
/// - `422 Unprocessable Entity` - A field rule failed
pub async fn store(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ApiResponse, AppError> {
    let form = MultipartForm::read(multipart?).await?;
    let submission = ProceedingFileSubmission::from_create_form(form)?;

    let service =
        ProceedingFileService::new(&state.db, &state.cipher, state.storage.as_ref(), locale);
    let model = service.create(submission, actor.user()).await?;

    Ok(ApiResponse::created(
        locale,
        service.resources().message(Message::Created),
        service.resources().present(model).await?,
    ))
}

/// Updates a proceeding file; a new document replaces the stored one.
pub async fn update(
    State(state): State<AppState>,
    locale: Locale,
    actor: Actor,
    id: Result<Path<i32>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(id) = id?;
    let form = MultipartForm::read(multipart?).await?;
    let submission = ProceedingFileSubmission::from_update_form(form)?;

    let service =
        ProceedingFileService::new(&state.db, &state.cipher, state.storage.as_ref(), locale);
    let model = service.update(id, submission, actor.user()).await?;

    Ok(ApiResponse::ok(
        locale,
        service.resources().message(Message::Updated),
        service.resources().present(model).await?,
    ))
}
