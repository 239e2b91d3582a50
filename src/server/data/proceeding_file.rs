use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use entity::proceeding_file::{ActiveModel, Entity, Model};

use crate::{
    model::proceeding_file::{CreateProceedingFileDto, UpdateProceedingFileDto},
    server::{
        data::{
            employee,
            resource::{patch, patch_nullable, require_live, Resource},
        },
        error::AppError,
        i18n::{Label, Locale},
        model::verification::Verification,
        util::crypto::FieldCipher,
    },
};

/// Document attached to an employee's personnel file.
pub struct ProceedingFileResource;

#[async_trait]
impl Resource for ProceedingFileResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateProceedingFileDto;
    type Update = UpdateProceedingFileDto;

    const PATH: &'static str = "/api/proceeding-files";
    const LABEL: Label = Label::new("Expediente", "Proceeding file");

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateProceedingFileDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            name: ActiveValue::Set(input.name),
            description: ActiveValue::Set(input.description),
            file_url: ActiveValue::Set(input.file_url),
            expiration_at: ActiveValue::Set(input.expiration_at),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateProceedingFileDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.name, patch_dto.name);
        patch_nullable(&mut model.description, patch_dto.description);
        patch_nullable(&mut model.file_url, patch_dto.file_url);
        patch_nullable(&mut model.expiration_at, patch_dto.expiration_at);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateProceedingFileDto,
    ) -> Result<Verification, AppError> {
        require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL).await
    }
}
