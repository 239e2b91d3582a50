//! Field validation for request DTOs.
//!
//! Every create/update DTO implements [`Validate`]. Rules are evaluated in
//! declaration order and only the first failure is reported, which is what the
//! API returns to the caller.

use thiserror::Error;

/// First failing rule of a request payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Rule chain that remembers the first failure.
///
/// ```rust,ignore
/// Rules::new()
///     .required("name", &self.name)
///     .max_length("name", &self.name, 120)
///     .when(self.email.as_deref(), |rules, email| rules.email("email", email))
///     .finish()
/// ```
#[derive(Debug, Default)]
pub struct Rules {
    error: Option<ValidationError>,
}

impl Rules {
    pub fn new() -> Self {
        Self { error: None }
    }

    /// Records `message` for `field` unless `passes` holds or an earlier rule already failed.
    pub fn rule(mut self, field: &str, passes: bool, message: impl FnOnce() -> String) -> Self {
        if self.error.is_none() && !passes {
            self.error = Some(ValidationError {
                field: field.to_string(),
                message: message(),
            });
        }
        self
    }

    pub fn required(self, field: &str, value: &str) -> Self {
        self.rule(field, !value.trim().is_empty(), || {
            format!("The {} field is required", field)
        })
    }

    pub fn max_length(self, field: &str, value: &str, max: usize) -> Self {
        self.rule(field, value.chars().count() <= max, || {
            format!("The {} field must not exceed {} characters", field, max)
        })
    }

    pub fn email(self, field: &str, value: &str) -> Self {
        let valid = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };

        self.rule(field, valid, || {
            format!("The {} field must be a valid email address", field)
        })
    }

    pub fn one_of(self, field: &str, value: &str, allowed: &[&str]) -> Self {
        self.rule(field, allowed.contains(&value), || {
            format!("The {} field must be one of: {}", field, allowed.join(", "))
        })
    }

    pub fn positive(self, field: &str, value: i32) -> Self {
        self.rule(field, value > 0, || {
            format!("The {} field must be a valid identifier", field)
        })
    }

    /// Requires `value` to be made of ASCII digits only, with a length in `min..=max`.
    pub fn digits(self, field: &str, value: &str, min: usize, max: usize) -> Self {
        let valid = value.chars().all(|c| c.is_ascii_digit()) && (min..=max).contains(&value.len());

        self.rule(field, valid, || {
            if min == max {
                format!("The {} field must contain exactly {} digits", field, min)
            } else {
                format!(
                    "The {} field must contain between {} and {} digits",
                    field, min, max
                )
            }
        })
    }

    /// Applies `apply` only when the optional value is present.
    pub fn when<T>(self, value: Option<T>, apply: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            Some(value) => apply(self, value),
            None => self,
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_failure_only() {
        let result = Rules::new()
            .required("name", "")
            .email("email", "not-an-email")
            .finish();

        let error = result.unwrap_err();
        assert_eq!(error.field, "name");
        assert_eq!(error.message, "The name field is required");
    }

    #[test]
    fn skips_optional_rules_when_value_missing() {
        let email: Option<&str> = None;

        let result = Rules::new()
            .when(email, |rules, email| rules.email("email", email))
            .finish();

        assert!(result.is_ok());
    }

    #[test]
    fn validates_email_shape() {
        assert!(Rules::new().email("email", "rh@example.com").finish().is_ok());
        assert!(Rules::new().email("email", "rh@example").finish().is_err());
        assert!(Rules::new().email("email", "@example.com").finish().is_err());
        assert!(Rules::new().email("email", "a@b@example.com").finish().is_err());
    }

    #[test]
    fn validates_digit_strings() {
        assert!(Rules::new().digits("clabe", "012345678901234567", 18, 18).finish().is_ok());
        assert!(Rules::new().digits("clabe", "01234567890123456", 18, 18).finish().is_err());
        assert!(Rules::new().digits("account", "12ab5678", 8, 18).finish().is_err());
    }
}
