use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    model::api::{EnvelopeDto, EnvelopeType},
    server::i18n::Locale,
};

/// Successful envelope response.
pub struct ApiResponse {
    status: StatusCode,
    body: EnvelopeDto<Value>,
}

impl ApiResponse {
    pub fn ok(locale: Locale, message: String, data: Value) -> Self {
        Self::success(StatusCode::OK, locale, message, data)
    }

    pub fn created(locale: Locale, message: String, data: Value) -> Self {
        Self::success(StatusCode::CREATED, locale, message, data)
    }

    fn success(status: StatusCode, locale: Locale, message: String, data: Value) -> Self {
        Self {
            status,
            body: EnvelopeDto {
                kind: EnvelopeType::Success,
                title: locale.title(EnvelopeType::Success).to_string(),
                message,
                data,
            },
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
