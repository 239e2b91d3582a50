//! Aircraft, their pilot assignments and airports.

use serde::{Deserialize, Serialize};

use crate::model::{
    normalize,
    validation::{Rules, Validate, ValidationError},
};

pub const PILOT_ROLES: &[&str] = &["pilot", "copilot"];

fn default_true() -> bool {
    true
}

fn code_rule(rules: Rules, field: &str, value: &str, len: usize) -> Rules {
    rules.rule(
        field,
        value.len() == len && value.chars().all(|c| c.is_ascii_alphanumeric()),
        || format!("The {} field must contain exactly {} letters", field, len),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAircraftDto {
    #[serde(deserialize_with = "normalize::upper")]
    pub registration: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub model: String,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub serial_number: Option<String>,
    #[serde(default = "default_true", deserialize_with = "normalize::flexible_bool")]
    pub active: bool,
}

impl Validate for CreateAircraftDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .required("registration", &self.registration)
            .max_length("registration", &self.registration, 10)
            .required("model", &self.model)
            .max_length("model", &self.model, 80)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAircraftDto {
    #[serde(default, deserialize_with = "normalize::upper_opt")]
    pub registration: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "normalize::flexible_bool_opt")]
    pub active: Option<bool>,
}

impl Validate for UpdateAircraftDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.registration.as_deref(), |rules, registration| {
                rules.max_length("registration", registration, 10)
            })
            .when(self.model.as_deref(), |rules, model| rules.max_length("model", model, 80))
            .finish()
    }
}

/// Body of `POST /api/aircraft/{id}/pilots`; the aircraft comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignPilotDto {
    pub employee_id: i32,
    #[serde(deserialize_with = "normalize::lower")]
    pub role: String,
}

impl Validate for AssignPilotDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id", self.employee_id)
            .one_of("role", &self.role, PILOT_ROLES)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAircraftPilotDto {
    pub aircraft_id: i32,
    pub employee_id: i32,
    pub role: String,
}

impl CreateAircraftPilotDto {
    pub fn new(aircraft_id: i32, assignment: AssignPilotDto) -> Self {
        Self {
            aircraft_id,
            employee_id: assignment.employee_id,
            role: assignment.role,
        }
    }
}

impl Validate for CreateAircraftPilotDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("aircraft_id", self.aircraft_id)
            .positive("employee_id", self.employee_id)
            .one_of("role", &self.role, PILOT_ROLES)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAircraftPilotDto {
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub role: Option<String>,
}

impl Validate for UpdateAircraftPilotDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.role.as_deref(), |rules, role| rules.one_of("role", role, PILOT_ROLES))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAirportDto {
    #[serde(deserialize_with = "normalize::trimmed")]
    pub name: String,
    #[serde(deserialize_with = "normalize::upper")]
    pub iata_code: String,
    #[serde(default, deserialize_with = "normalize::upper_opt")]
    pub icao_code: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub country: Option<String>,
}

impl Validate for CreateAirportDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let rules = Rules::new()
            .required("name", &self.name)
            .max_length("name", &self.name, 150);

        code_rule(rules, "iata_code", &self.iata_code, 3)
            .when(self.icao_code.as_deref(), |rules, icao| {
                code_rule(rules, "icao_code", icao, 4)
            })
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAirportDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "normalize::upper_opt")]
    pub iata_code: Option<String>,
    #[serde(default, deserialize_with = "normalize::upper_opt")]
    pub icao_code: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub country: Option<String>,
}

impl Validate for UpdateAirportDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.iata_code.as_deref(), |rules, iata| {
                code_rule(rules, "iata_code", iata, 3)
            })
            .when(self.icao_code.as_deref(), |rules, icao| {
                code_rule(rules, "icao_code", icao, 4)
            })
            .finish()
    }
}
