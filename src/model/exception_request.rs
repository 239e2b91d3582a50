use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    normalize,
    validation::{Rules, Validate, ValidationError},
};

pub const STATUS_REQUESTED: &str = "requested";
pub const STATUSES: &[&str] = &[STATUS_REQUESTED, "accepted", "refused"];

fn default_status() -> String {
    STATUS_REQUESTED.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExceptionRequestDto {
    pub employee_id: i32,
    pub exception_type_id: i32,
    #[serde(deserialize_with = "normalize::midnight_date")]
    pub requested_date: NaiveDate,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
    #[serde(default = "default_status", deserialize_with = "normalize::lower")]
    pub status: String,
}

impl Validate for CreateExceptionRequestDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id", self.employee_id)
            .positive("exception_type_id", self.exception_type_id)
            .one_of("status", &self.status, STATUSES)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExceptionRequestDto {
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub requested_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub status: Option<String>,
}

impl Validate for UpdateExceptionRequestDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.status.as_deref(), |rules, status| {
                rules.one_of("status", status, STATUSES)
            })
            .finish()
    }
}
