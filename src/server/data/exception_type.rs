use async_trait::async_trait;
use sea_orm::{ActiveValue, IntoActiveModel};

use entity::exception_type::{ActiveModel, Entity, Model};

use crate::{
    model::catalog::{CreateExceptionTypeDto, UpdateExceptionTypeDto},
    server::{
        data::resource::{patch, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Tipo de excepción", "Exception type");

pub struct ExceptionTypeResource;

#[async_trait]
impl Resource for ExceptionTypeResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateExceptionTypeDto;
    type Update = UpdateExceptionTypeDto;

    const PATH: &'static str = "/api/exception-types";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["name"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateExceptionTypeDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            name: ActiveValue::Set(input.name),
            needs_description: ActiveValue::Set(input.needs_description),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateExceptionTypeDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.name, patch_dto.name);
        patch(&mut model.needs_description, patch_dto.needs_description);

        Ok(model)
    }
}
