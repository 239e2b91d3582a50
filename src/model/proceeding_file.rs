use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::validation::{Rules, Validate, ValidationError};

pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "doc", "docx"];

/// Proceeding file record as persisted; `file_url` is filled in after the
/// uploaded file has been stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProceedingFileDto {
    pub employee_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub expiration_at: Option<NaiveDate>,
}

impl Validate for CreateProceedingFileDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id", self.employee_id)
            .required("name", &self.name)
            .max_length("name", &self.name, 150)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProceedingFileDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub expiration_at: Option<NaiveDate>,
}

impl Validate for UpdateProceedingFileDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.name.as_deref(), |rules, name| {
                rules.required("name", name).max_length("name", name, 150)
            })
            .finish()
    }
}

/// Lower-cased extension of `file_name` if it is one of the accepted types.
pub fn allowed_extension(file_name: &str) -> Option<String> {
    let (_, extension) = file_name.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();

    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}
