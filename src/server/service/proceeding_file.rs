use crate::{
    model::{
        proceeding_file::{allowed_extension, CreateProceedingFileDto, UpdateProceedingFileDto},
        validation::Validate,
    },
    server::{
        data::proceeding_file::ProceedingFileResource,
        error::AppError,
        external::storage::{FileNaming, FileStorage, FileUpload},
        i18n::Locale,
        model::proceeding_file::ProceedingFileSubmission,
        service::resource::ResourceService,
        util::{crypto::FieldCipher, multipart::UploadedFile},
    },
};

/// Storage folder holding proceeding file documents.
pub const FOLDER: &str = "proceeding_files";

/// Proceeding files: the generic pipeline plus the uploaded document.
pub struct ProceedingFileService<'a> {
    resources: ResourceService<'a, ProceedingFileResource>,
    storage: &'a dyn FileStorage,
    locale: Locale,
}

impl<'a> ProceedingFileService<'a> {
    pub fn new(
        db: &'a sea_orm::DatabaseConnection,
        cipher: &'a FieldCipher,
        storage: &'a dyn FileStorage,
        locale: Locale,
    ) -> Self {
        Self {
            resources: ResourceService::new(db, cipher, locale),
            storage,
            locale,
        }
    }

    /// Stores the document, if any, then creates the record pointing at it.
    ///
    /// If the record cannot be created the freshly uploaded object is removed.
    ///
    /// # Returns
    /// - `Ok(Model)` - Created record
    /// - `Err(AppError::BadRequest)` - Neither description nor file, or a file
    ///   type that is not accepted
    pub async fn create(
        &self,
        submission: ProceedingFileSubmission<CreateProceedingFileDto>,
        actor: Option<&entity::user::Model>,
    ) -> Result<entity::proceeding_file::Model, AppError> {
        let ProceedingFileSubmission { mut record, file } = submission;

        if record.description.is_none() && file.is_none() {
            return Err(AppError::BadRequest(
                self.locale
                    .pick(
                        "Se requiere una descripción o un archivo",
                        "A description or a file is required",
                    )
                    .to_string(),
            ));
        }
        record.validate()?;

        let uploaded = match file {
            Some(file) => Some(self.upload(file).await?),
            None => None,
        };
        record.file_url = uploaded.clone();

        match self.resources.create(record, actor).await {
            Ok(model) => Ok(model),
            Err(err) => {
                if let Some(url) = uploaded {
                    self.discard(&url).await;
                }
                Err(err)
            }
        }
    }

    /// Updates the record; a new document replaces the stored one, which is
    /// deleted once the record points at the new URL.
    pub async fn update(
        &self,
        id: i32,
        submission: ProceedingFileSubmission<UpdateProceedingFileDto>,
        actor: Option<&entity::user::Model>,
    ) -> Result<entity::proceeding_file::Model, AppError> {
        let ProceedingFileSubmission { mut record, file } = submission;
        record.validate()?;

        let current = self.resources.show(id).await?;

        let uploaded = match file {
            Some(file) => Some(self.upload(file).await?),
            None => None,
        };
        record.file_url = uploaded.clone();

        match self.resources.update(id, record, actor).await {
            Ok(model) => {
                if let (Some(_), Some(previous)) = (&uploaded, &current.file_url) {
                    self.discard(previous).await;
                }
                Ok(model)
            }
            Err(err) => {
                if let Some(url) = uploaded {
                    self.discard(&url).await;
                }
                Err(err)
            }
        }
    }

    pub fn resources(&self) -> &ResourceService<'a, ProceedingFileResource> {
        &self.resources
    }

    async fn upload(&self, file: UploadedFile) -> Result<String, AppError> {
        if allowed_extension(&file.file_name).is_none() {
            return Err(AppError::BadRequest(
                self.locale
                    .pick(
                        "Tipo de archivo no permitido",
                        "File type not allowed",
                    )
                    .to_string(),
            ));
        }

        let url = self
            .storage
            .upload(FileUpload {
                folder: FOLDER.to_string(),
                original_name: file.file_name,
                content_type: file.content_type,
                bytes: file.bytes,
                naming: FileNaming::Generated,
            })
            .await?;

        Ok(url)
    }

    async fn discard(&self, url: &str) {
        if let Err(err) = self.storage.delete_by_url(FOLDER, url).await {
            tracing::warn!("Failed to delete stored file {}: {}", url, err);
        }
    }
}
