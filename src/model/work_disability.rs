use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    normalize,
    validation::{Rules, Validate, ValidationError},
};

pub const DISABILITY_TYPES: &[&str] = &["illness", "work_risk", "maternity"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkDisabilityDto {
    pub employee_id: i32,
    #[serde(deserialize_with = "normalize::upper")]
    pub insurance_folio: String,
    #[serde(deserialize_with = "normalize::lower")]
    pub disability_type: String,
    #[serde(deserialize_with = "normalize::midnight_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "normalize::midnight_date")]
    pub end_date: NaiveDate,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
}

impl Validate for CreateWorkDisabilityDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id", self.employee_id)
            .required("insurance_folio", &self.insurance_folio)
            .max_length("insurance_folio", &self.insurance_folio, 30)
            .one_of("disability_type", &self.disability_type, DISABILITY_TYPES)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkDisabilityDto {
    #[serde(default, deserialize_with = "normalize::upper_opt")]
    pub insurance_folio: Option<String>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub disability_type: Option<String>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub description: Option<String>,
}

impl Validate for UpdateWorkDisabilityDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.insurance_folio.as_deref(), |rules, folio| {
                rules.max_length("insurance_folio", folio, 30)
            })
            .when(self.disability_type.as_deref(), |rules, kind| {
                rules.one_of("disability_type", kind, DISABILITY_TYPES)
            })
            .finish()
    }
}
