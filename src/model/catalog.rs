//! Reference catalogs: business units, banks, medical conditions, exception
//! types and shifts.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    normalize,
    validation::{Rules, Validate, ValidationError},
};

fn default_true() -> bool {
    true
}

fn slug_rule(rules: Rules, slug: &str) -> Rules {
    rules
        .required("slug", slug)
        .max_length("slug", slug, 60)
        .rule(
            "slug",
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            || "The slug field may only contain lowercase letters, digits and dashes".to_string(),
        )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusinessUnitDto {
    #[serde(deserialize_with = "normalize::trimmed")]
    pub name: String,
    #[serde(deserialize_with = "normalize::lower")]
    pub slug: String,
    #[serde(default = "default_true", deserialize_with = "normalize::flexible_bool")]
    pub active: bool,
}

impl Validate for CreateBusinessUnitDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let rules = Rules::new()
            .required("name", &self.name)
            .max_length("name", &self.name, 120);

        slug_rule(rules, &self.slug).finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBusinessUnitDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "normalize::flexible_bool_opt")]
    pub active: Option<bool>,
}

impl Validate for UpdateBusinessUnitDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.name.as_deref(), |rules, name| rules.max_length("name", name, 120))
            .when(self.slug.as_deref(), slug_rule)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBankDto {
    #[serde(deserialize_with = "normalize::trimmed")]
    pub name: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub code: String,
}

impl Validate for CreateBankDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .required("name", &self.name)
            .max_length("name", &self.name, 120)
            .required("code", &self.code)
            .max_length("code", &self.code, 10)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBankDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub code: Option<String>,
}

impl Validate for UpdateBankDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.name.as_deref(), |rules, name| rules.max_length("name", name, 120))
            .when(self.code.as_deref(), |rules, code| rules.max_length("code", code, 10))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMedicalConditionDto {
    #[serde(deserialize_with = "normalize::trimmed")]
    pub name: String,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
}

impl Validate for CreateMedicalConditionDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .required("name", &self.name)
            .max_length("name", &self.name, 150)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMedicalConditionDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
}

impl Validate for UpdateMedicalConditionDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.name.as_deref(), |rules, name| rules.max_length("name", name, 150))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExceptionTypeDto {
    #[serde(deserialize_with = "normalize::trimmed")]
    pub name: String,
    #[serde(default, deserialize_with = "normalize::flexible_bool")]
    pub needs_description: bool,
}

impl Validate for CreateExceptionTypeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .required("name", &self.name)
            .max_length("name", &self.name, 120)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExceptionTypeDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "normalize::flexible_bool_opt")]
    pub needs_description: Option<bool>,
}

impl Validate for UpdateExceptionTypeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.name.as_deref(), |rules, name| rules.max_length("name", name, 120))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftDto {
    #[serde(deserialize_with = "normalize::trimmed")]
    pub name: String,
    #[serde(deserialize_with = "normalize::time_of_day")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "normalize::time_of_day")]
    pub end_time: NaiveTime,
}

impl Validate for CreateShiftDto {
    fn validate(&self) -> Result<(), ValidationError> {
        // Overnight shifts end before they start, so only identical times are rejected.
        Rules::new()
            .required("name", &self.name)
            .max_length("name", &self.name, 80)
            .rule("end_time", self.start_time != self.end_time, || {
                "The end_time field must differ from start_time".to_string()
            })
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShiftDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "normalize::time_of_day_opt")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "normalize::time_of_day_opt")]
    pub end_time: Option<NaiveTime>,
}

impl Validate for UpdateShiftDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.name.as_deref(), |rules, name| rules.max_length("name", name, 80))
            .finish()
    }
}
