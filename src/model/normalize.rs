//! Input normalization applied while deserializing request bodies.
//!
//! Clients send the same value in several shapes: padded strings, booleans as
//! `"true"`/`"1"`/`1`, dates with or without a time part. These helpers are
//! used with `#[serde(deserialize_with = "...")]` so DTOs always hold the
//! canonical form. The `parse_*` functions are shared with multipart parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseBool {
    Bool(bool),
    Int(i64),
    Str(String),
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(value, "%H:%M").ok())
}

/// Trims surrounding whitespace; empty strings become `None`.
pub fn clean(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?.trim().to_string())
}

pub fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|value| clean(&value)))
}

/// Trimmed and upper-cased, for codes such as registrations and IATA codes.
pub fn upper<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?.trim().to_uppercase())
}

pub fn upper_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|value| clean(&value))
        .map(|value| value.to_uppercase()))
}

/// Trimmed and lower-cased, for slugs, keys and email addresses.
pub fn lower<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?.trim().to_lowercase())
}

pub fn lower_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|value| clean(&value))
        .map(|value| value.to_lowercase()))
}

fn loose_bool<E: Error>(value: LooseBool) -> Result<bool, E> {
    match value {
        LooseBool::Bool(value) => Ok(value),
        LooseBool::Int(0) => Ok(false),
        LooseBool::Int(1) => Ok(true),
        LooseBool::Int(other) => Err(E::custom(format!("invalid boolean value: {}", other))),
        LooseBool::Str(text) => {
            parse_bool(&text).ok_or_else(|| E::custom(format!("invalid boolean value: {}", text)))
        }
    }
}

pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    loose_bool(LooseBool::deserialize(deserializer)?)
}

pub fn flexible_bool_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LooseBool>::deserialize(deserializer)?
        .map(loose_bool)
        .transpose()
}

pub fn midnight_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).ok_or_else(|| D::Error::custom(format!("invalid date: {}", value)))
}

pub fn midnight_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.and_then(|value| clean(&value)) {
        Some(value) => parse_date(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {}", value))),
        None => Ok(None),
    }
}

pub fn time_of_day<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_time(&value).ok_or_else(|| D::Error::custom(format!("invalid time: {}", value)))
}

pub fn time_of_day_opt<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.and_then(|value| clean(&value)) {
        Some(value) => parse_time(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid time: {}", value))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "trimmed")]
        name: String,
        #[serde(default, deserialize_with = "trimmed_opt")]
        nickname: Option<String>,
        #[serde(deserialize_with = "flexible_bool")]
        active: bool,
        #[serde(deserialize_with = "midnight_date")]
        birthday: NaiveDate,
        #[serde(default, deserialize_with = "midnight_date_opt")]
        hired: Option<NaiveDate>,
    }

    #[test]
    fn normalizes_loose_input() {
        let sample: Sample = serde_json::from_value(json!({
            "name": "  Ana  ",
            "nickname": "   ",
            "active": "1",
            "birthday": "1990-05-17T00:00:00.000Z",
        }))
        .unwrap();

        assert_eq!(sample.name, "Ana");
        assert_eq!(sample.nickname, None);
        assert!(sample.active);
        assert_eq!(sample.birthday, NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
        assert_eq!(sample.hired, None);
    }

    #[test]
    fn accepts_booleans_in_every_shape() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(0), false),
            (json!("true"), true),
            (json!("FALSE"), false),
        ] {
            let sample: Sample = serde_json::from_value(json!({
                "name": "x",
                "active": raw,
                "birthday": "2000-01-01",
            }))
            .unwrap();
            assert_eq!(sample.active, expected);
        }
    }

    #[test]
    fn rejects_unparseable_dates() {
        let result = serde_json::from_value::<Sample>(json!({
            "name": "x",
            "active": true,
            "birthday": "17/05/1990",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn parses_times_with_and_without_seconds() {
        assert_eq!(parse_time("07:30"), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(parse_time("22:00:15"), NaiveTime::from_hms_opt(22, 0, 15));
        assert_eq!(parse_time("25:00"), None);
    }
}
