use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    normalize,
    validation::{Rules, Validate, ValidationError},
};

fn default_true() -> bool {
    true
}

/// Request to move `employee_id_from` off `shift_id_from` on `date_from`
/// and onto the other side's slot.
///
/// With `is_swap` (the default) the other employee takes the first slot in
/// return, which is stored as a second, mirrored row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftChangeDto {
    pub employee_id_from: i32,
    pub shift_id_from: i32,
    #[serde(deserialize_with = "normalize::midnight_date")]
    pub date_from: NaiveDate,
    pub employee_id_to: i32,
    pub shift_id_to: i32,
    #[serde(deserialize_with = "normalize::midnight_date")]
    pub date_to: NaiveDate,
    #[serde(default = "default_true", deserialize_with = "normalize::flexible_bool")]
    pub is_swap: bool,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub note: Option<String>,
}

impl CreateShiftChangeDto {
    /// The same exchange seen from the other employee.
    pub fn mirrored(&self) -> Self {
        Self {
            employee_id_from: self.employee_id_to,
            shift_id_from: self.shift_id_to,
            date_from: self.date_to,
            employee_id_to: self.employee_id_from,
            shift_id_to: self.shift_id_from,
            date_to: self.date_from,
            is_swap: self.is_swap,
            note: self.note.clone(),
        }
    }
}

impl Validate for CreateShiftChangeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id_from", self.employee_id_from)
            .positive("shift_id_from", self.shift_id_from)
            .positive("employee_id_to", self.employee_id_to)
            .positive("shift_id_to", self.shift_id_to)
            .when(self.note.as_deref(), |rules, note| rules.max_length("note", note, 500))
            .finish()
    }
}

/// Only the note can change once a shift change is recorded; moving a side
/// would break its mirror.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShiftChangeDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub note: Option<String>,
}

impl Validate for UpdateShiftChangeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.note.as_deref(), |rules, note| rules.max_length("note", note, 500))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mirrored_swaps_both_sides() {
        let dto: CreateShiftChangeDto = serde_json::from_value(json!({
            "employee_id_from": 1,
            "shift_id_from": 10,
            "date_from": "2024-01-10",
            "employee_id_to": 2,
            "shift_id_to": 20,
            "date_to": "2024-01-11",
        }))
        .unwrap();

        assert!(dto.is_swap);

        let mirror = dto.mirrored();
        assert_eq!(mirror.employee_id_from, 2);
        assert_eq!(mirror.shift_id_from, 20);
        assert_eq!(mirror.date_from, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
        assert_eq!(mirror.employee_id_to, 1);
        assert_eq!(mirror.date_to, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }
}
