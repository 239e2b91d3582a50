//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into envelope responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod crypto;
pub mod mail;
pub mod storage;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{
    model::{
        api::{EnvelopeDto, EnvelopeType},
        validation::ValidationError,
    },
    server::{
        error::{
            auth::AuthError, config::ConfigError, crypto::CryptoError, mail::MailError,
            storage::StorageError,
        },
        i18n::Locale,
        model::verification::Verification,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Every response, successful or not, is rendered as an envelope
/// `{ type, title, message, data }`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Bearer token could not be resolved to a user.
    ///
    /// Results in 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Object storage failure while uploading or deleting a file.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Mail relay failure.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Field encryption or decryption failure.
    #[error(transparent)]
    CryptoErr(#[from] CryptoError),

    /// Cron scheduler error.
    ///
    /// Results in 500 Internal Server Error when scheduled job operations fail.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Serializing a model for a response or an audit snapshot failed.
    #[error(transparent)]
    SerializeErr(#[from] serde_json::Error),

    /// Socket level failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request payload failed a field rule.
    ///
    /// Results in 422 Unprocessable Entity with the first failing message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Business condition reported by a service check.
    ///
    /// The HTTP status and message are decided by the service; a conflict with an
    /// existing live record is 409.
    #[error("{}", .0.message)]
    Verification(Verification),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

fn envelope(status: StatusCode, kind: EnvelopeType, title: &str, message: String) -> Response {
    (
        status,
        Json(EnvelopeDto {
            kind,
            title: title.to_string(),
            message,
            data: json!({}),
        }),
    )
        .into_response()
}

/// Converts application errors into envelope responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `AuthErr`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `Validation`
/// - Service decided status - For `Verification` (409 on conflicts)
/// - 500 Internal Server Error - For everything else, with the details only logged
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let locale = Locale::default();
        let warning = locale.title(EnvelopeType::Warning);

        match self {
            Self::Verification(verification) => {
                let status = StatusCode::from_u16(verification.status)
                    .unwrap_or(StatusCode::BAD_REQUEST);
                envelope(
                    status,
                    verification.kind,
                    &verification.title,
                    verification.message,
                )
            }
            Self::Validation(err) => envelope(
                StatusCode::UNPROCESSABLE_ENTITY,
                EnvelopeType::Warning,
                warning,
                err.message,
            ),
            Self::NotFound(msg) => {
                envelope(StatusCode::NOT_FOUND, EnvelopeType::Warning, warning, msg)
            }
            Self::BadRequest(msg) => {
                envelope(StatusCode::BAD_REQUEST, EnvelopeType::Warning, warning, msg)
            }
            Self::AuthErr(err) => envelope(
                StatusCode::UNAUTHORIZED,
                EnvelopeType::Warning,
                warning,
                err.to_string(),
            ),
            err => {
                tracing::error!("{}", err);
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EnvelopeType::Error,
                    locale.title(EnvelopeType::Error),
                    locale.internal_error().to_string(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> EnvelopeDto<serde_json::Value> {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn internal_errors_do_not_leak_details() {
        let response =
            AppError::DbErr(sea_orm::DbErr::Custom("secret connection string".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.kind, EnvelopeType::Error);
        assert!(!body.message.contains("secret"));
    }

    #[tokio::test]
    async fn validation_errors_are_unprocessable() {
        let response = AppError::Validation(ValidationError {
            field: "code".to_string(),
            message: "The code field is required".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_of(response).await;
        assert_eq!(body.kind, EnvelopeType::Warning);
        assert_eq!(body.message, "The code field is required");
    }

    #[tokio::test]
    async fn verification_uses_its_own_status() {
        let response = AppError::Verification(Verification {
            status: 409,
            kind: EnvelopeType::Warning,
            title: "Advertencia".to_string(),
            message: "Duplicado".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_of(response).await.message, "Duplicado");
    }
}
