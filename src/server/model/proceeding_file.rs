use crate::{
    model::proceeding_file::{CreateProceedingFileDto, UpdateProceedingFileDto},
    server::{
        error::AppError,
        util::{
            multipart::{MultipartForm, UploadedFile},
            parse::{parse_id, parse_optional_date},
        },
    },
};

/// Multipart form field carrying the document.
pub const FILE_FIELD: &str = "file";

/// Proceeding file request read from a multipart form: the record fields plus
/// the document, if one was attached.
#[derive(Debug)]
pub struct ProceedingFileSubmission<T> {
    pub record: T,
    pub file: Option<UploadedFile>,
}

impl ProceedingFileSubmission<CreateProceedingFileDto> {
    /// Reads a create form. A missing `employee_id` or `name` is left for
    /// validation to report; a malformed one is rejected here.
    pub fn from_create_form(mut form: MultipartForm) -> Result<Self, AppError> {
        let employee_id = match form.text("employee_id") {
            Some(value) => parse_id("employee_id", &value)?,
            None => 0,
        };

        Ok(Self {
            record: CreateProceedingFileDto {
                employee_id,
                name: form.text("name").unwrap_or_default(),
                description: form.text("description"),
                file_url: None,
                expiration_at: parse_optional_date(
                    "expiration_at",
                    form.text("expiration_at").as_deref(),
                )?,
            },
            file: form.take_file(FILE_FIELD),
        })
    }
}

impl ProceedingFileSubmission<UpdateProceedingFileDto> {
    pub fn from_update_form(mut form: MultipartForm) -> Result<Self, AppError> {
        Ok(Self {
            record: UpdateProceedingFileDto {
                name: form.text("name"),
                description: form.text("description"),
                file_url: None,
                expiration_at: parse_optional_date(
                    "expiration_at",
                    form.text("expiration_at").as_deref(),
                )?,
            },
            file: form.take_file(FILE_FIELD),
        })
    }
}
