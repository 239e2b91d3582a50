use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Router,
};

use crate::server::{
    data::employee_bank::{decrypt_account, EmployeeBankResource, LABEL},
    error::AppError,
    i18n::{Locale, Message},
    service::resource::ResourceService,
    state::AppState,
    util::response::ApiResponse,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/employee-banks/{id}/account", get(show_account))
}

/// Full account number and CLABE of a bank account, decrypted.
///
/// # Returns
/// - `200 OK` - `{ account_number, clabe }`
/// - `404 Not Found` - No live bank account with that id
/// - `500 Internal Server Error` - Stored ciphertext cannot be decrypted with `APP_KEY`
pub async fn show_account(
    State(state): State<AppState>,
    locale: Locale,
    id: Result<Path<i32>, PathRejection>,
) -> Result<ApiResponse, AppError> {
    let Path(id) = id?;

    let account = ResourceService::<EmployeeBankResource>::new(&state.db, &state.cipher, locale)
        .show(id)
        .await?;
    let decrypted = decrypt_account(&account, &state.cipher)?;

    Ok(ApiResponse::ok(
        locale,
        locale.message(Message::Found, LABEL),
        serde_json::to_value(decrypted)?,
    ))
}
