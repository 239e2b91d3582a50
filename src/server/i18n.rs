//! Localized titles and messages for response envelopes.
//!
//! The locale is taken from the `Accept-Language` header. Spanish is the
//! default; English is selected when the first language tag starts with `en`.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header::ACCEPT_LANGUAGE, http::request::Parts};

use crate::model::api::EnvelopeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
}

/// Human readable name of a resource in every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub es: &'static str,
    pub en: &'static str,
}

impl Label {
    pub const fn new(es: &'static str, en: &'static str) -> Self {
        Self { es, en }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Created,
    Updated,
    Deleted,
    Found,
    Listed,
    NotFound,
    Conflict,
}

impl Locale {
    /// Parses an `Accept-Language` value such as `en-US,en;q=0.9`.
    pub fn from_header(value: &str) -> Self {
        let primary = value
            .split(',')
            .next()
            .and_then(|tag| tag.split(';').next())
            .map(str::trim)
            .unwrap_or_default()
            .to_ascii_lowercase();

        if primary.starts_with("en") {
            Locale::En
        } else {
            Locale::Es
        }
    }

    pub fn label(self, label: Label) -> &'static str {
        match self {
            Locale::Es => label.es,
            Locale::En => label.en,
        }
    }

    pub fn title(self, kind: EnvelopeType) -> &'static str {
        match (self, kind) {
            (Locale::Es, EnvelopeType::Success) => "Éxito",
            (Locale::Es, EnvelopeType::Warning) => "Advertencia",
            (Locale::Es, EnvelopeType::Error) => "Error",
            (Locale::En, EnvelopeType::Success) => "Success",
            (Locale::En, EnvelopeType::Warning) => "Warning",
            (Locale::En, EnvelopeType::Error) => "Error",
        }
    }

    pub fn message(self, message: Message, label: Label) -> String {
        let name = self.label(label);

        match (self, message) {
            (Locale::Es, Message::Created) => format!("{} creado correctamente", name),
            (Locale::Es, Message::Updated) => format!("{} actualizado correctamente", name),
            (Locale::Es, Message::Deleted) => format!("{} eliminado correctamente", name),
            (Locale::Es, Message::Found) => format!("{} encontrado", name),
            (Locale::Es, Message::Listed) => format!("Listado de {}", name),
            (Locale::Es, Message::NotFound) => format!("{} no encontrado", name),
            (Locale::Es, Message::Conflict) => {
                format!("Ya existe un registro de {} con los mismos datos", name)
            }
            (Locale::En, Message::Created) => format!("{} created successfully", name),
            (Locale::En, Message::Updated) => format!("{} updated successfully", name),
            (Locale::En, Message::Deleted) => format!("{} deleted successfully", name),
            (Locale::En, Message::Found) => format!("{} found", name),
            (Locale::En, Message::Listed) => format!("{} list", name),
            (Locale::En, Message::NotFound) => format!("{} not found", name),
            (Locale::En, Message::Conflict) => {
                format!("A {} record with the same data already exists", name)
            }
        }
    }

    /// Chooses between two translations of a one-off message.
    pub fn pick(self, es: &'static str, en: &'static str) -> &'static str {
        match self {
            Locale::Es => es,
            Locale::En => en,
        }
    }

    /// Generic message for failures whose details must stay server-side.
    pub fn internal_error(self) -> &'static str {
        match self {
            Locale::Es => "Ocurrió un error interno del servidor",
            Locale::En => "Internal server error",
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Locale::from_header)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPLOYEE: Label = Label::new("Empleado", "Employee");

    #[test]
    fn defaults_to_spanish() {
        assert_eq!(Locale::from_header(""), Locale::Es);
        assert_eq!(Locale::from_header("es-MX,es;q=0.9"), Locale::Es);
        assert_eq!(Locale::from_header("fr"), Locale::Es);
    }

    #[test]
    fn selects_english_from_first_tag() {
        assert_eq!(Locale::from_header("en-US,en;q=0.9"), Locale::En);
        assert_eq!(Locale::from_header("EN"), Locale::En);
        assert_eq!(Locale::from_header("es,en;q=0.8"), Locale::Es);
    }

    #[test]
    fn formats_messages_with_label() {
        assert_eq!(
            Locale::Es.message(Message::Created, EMPLOYEE),
            "Empleado creado correctamente"
        );
        assert_eq!(Locale::En.message(Message::NotFound, EMPLOYEE), "Employee not found");
    }
}
