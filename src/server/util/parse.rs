use crate::{model::normalize, server::error::AppError};

/// Parses a positive record id sent as text (multipart forms, path segments).
///
/// # Arguments
/// - `field` - Name of the field, used in the error message
/// - `value` - Raw text value
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(AppError::BadRequest)` - Value is not a positive integer
pub fn parse_id(field: &str, value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("The {} field must be a valid identifier", field)))
}

/// Parses an optional date sent as text, accepting the same shapes as JSON bodies.
pub fn parse_optional_date(
    field: &str,
    value: Option<&str>,
) -> Result<Option<chrono::NaiveDate>, AppError> {
    match value.and_then(normalize::clean) {
        Some(value) => normalize::parse_date(&value)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("The {} field must be a valid date", field))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_id("employee_id", " 42 ").unwrap(), 42);
        assert!(matches!(parse_id("employee_id", "0"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("employee_id", "abc"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn parses_optional_dates() {
        assert_eq!(parse_optional_date("expiration_at", None).unwrap(), None);
        assert_eq!(parse_optional_date("expiration_at", Some("  ")).unwrap(), None);
        assert_eq!(
            parse_optional_date("expiration_at", Some("2025-12-31T00:00:00Z")).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert!(parse_optional_date("expiration_at", Some("31/12/2025")).is_err());
    }
}
