//! System settings and notification recipients.

use serde::{Deserialize, Serialize};

use crate::model::{
    normalize,
    validation::{Rules, Validate, ValidationError},
};

pub const NOTIFICATION_KINDS: &[&str] = &["birthday", "general"];

fn default_kind() -> String {
    "birthday".to_string()
}

fn key_rule(rules: Rules, key: &str) -> Rules {
    rules
        .required("key", key)
        .max_length("key", key, 100)
        .rule(
            "key",
            key.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.'),
            || "The key field may only contain lowercase letters, digits, dots and underscores".to_string(),
        )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSystemSettingDto {
    #[serde(deserialize_with = "normalize::lower")]
    pub key: String,
    pub value: String,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
}

impl Validate for CreateSystemSettingDto {
    fn validate(&self) -> Result<(), ValidationError> {
        key_rule(Rules::new(), &self.key).finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSystemSettingDto {
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
}

impl Validate for UpdateSystemSettingDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new().when(self.key.as_deref(), key_rule).finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationEmailDto {
    #[serde(deserialize_with = "normalize::lower")]
    pub email: String,
    pub business_unit_id: i32,
    #[serde(default = "default_kind", deserialize_with = "normalize::lower")]
    pub kind: String,
}

impl Validate for CreateNotificationEmailDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .required("email", &self.email)
            .email("email", &self.email)
            .positive("business_unit_id", self.business_unit_id)
            .one_of("kind", &self.kind, NOTIFICATION_KINDS)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNotificationEmailDto {
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub email: Option<String>,
    pub business_unit_id: Option<i32>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub kind: Option<String>,
}

impl Validate for UpdateNotificationEmailDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.email.as_deref(), |rules, email| rules.email("email", email))
            .when(self.business_unit_id, |rules, id| rules.positive("business_unit_id", id))
            .when(self.kind.as_deref(), |rules, kind| {
                rules.one_of("kind", kind, NOTIFICATION_KINDS)
            })
            .finish()
    }
}
