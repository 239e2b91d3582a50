use async_trait::async_trait;
use sea_orm::{ActiveValue, IntoActiveModel};

use entity::medical_condition::{ActiveModel, Entity, Model};

use crate::{
    model::catalog::{CreateMedicalConditionDto, UpdateMedicalConditionDto},
    server::{
        data::resource::{patch, patch_nullable, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Condición médica", "Medical condition");

pub struct MedicalConditionResource;

#[async_trait]
impl Resource for MedicalConditionResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateMedicalConditionDto;
    type Update = UpdateMedicalConditionDto;

    const PATH: &'static str = "/api/medical-conditions";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["name"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateMedicalConditionDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            name: ActiveValue::Set(input.name),
            description: ActiveValue::Set(input.description),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateMedicalConditionDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.name, patch_dto.name);
        patch_nullable(&mut model.description, patch_dto.description);

        Ok(model)
    }
}
