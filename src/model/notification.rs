use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional body of the manual birthday-reminder trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunBirthdayRemindersDto {
    /// Day to evaluate instead of today.
    pub date: Option<NaiveDate>,
}

/// Outcome of one birthday-reminder batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayReportDto {
    /// Employees celebrating on the evaluated day.
    pub employees: usize,
    pub sent: usize,
    pub failed: usize,
}
