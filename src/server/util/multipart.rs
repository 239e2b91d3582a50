use std::collections::HashMap;

use axum::{body::Bytes, extract::Multipart};

use crate::server::error::AppError;

/// File part of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Multipart body read fully into memory: text fields by name plus file parts.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Drains every part of the request. Empty file parts are ignored, which is
    /// what browsers send for an untouched file input.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        form.files.insert(
                            name,
                            UploadedFile {
                                file_name,
                                content_type,
                                bytes,
                            },
                        );
                    }
                }
                None => {
                    form.fields.insert(name, field.text().await?);
                }
            }
        }

        Ok(form)
    }

    /// Text value of `name`, trimmed, or `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}
