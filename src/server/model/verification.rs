use serde::Serialize;

use crate::{
    model::api::EnvelopeType,
    server::{
        error::AppError,
        i18n::{Label, Locale, Message},
    },
};

/// Soft outcome of a business check performed before a write.
///
/// A passing verification has `status == 200`. Anything else is turned into
/// an [`AppError::Verification`] by [`Verification::into_result`] and rendered
/// with its own status, title and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub status: u16,
    #[serde(rename = "type")]
    pub kind: EnvelopeType,
    pub title: String,
    pub message: String,
}

impl Verification {
    pub const PASSED: u16 = 200;

    pub fn passed() -> Self {
        Self {
            status: Self::PASSED,
            kind: EnvelopeType::Success,
            title: String::new(),
            message: String::new(),
        }
    }

    /// A live record already holds the same business key.
    pub fn conflict(locale: Locale, label: Label) -> Self {
        Self::warning(409, locale, locale.message(Message::Conflict, label))
    }

    /// A referenced record does not exist.
    pub fn missing(locale: Locale, label: Label) -> Self {
        Self::warning(404, locale, locale.message(Message::NotFound, label))
    }

    /// The payload is well formed but breaks a business rule.
    pub fn rejected(locale: Locale, message: impl Into<String>) -> Self {
        Self::warning(400, locale, message.into())
    }

    fn warning(status: u16, locale: Locale, message: String) -> Self {
        Self {
            status,
            kind: EnvelopeType::Warning,
            title: locale.title(EnvelopeType::Warning).to_string(),
            message,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == Self::PASSED
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_passed() {
            Ok(())
        } else {
            Err(AppError::Verification(self))
        }
    }
}
