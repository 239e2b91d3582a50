use async_trait::async_trait;
use sea_orm::{ActiveValue, IntoActiveModel};

use entity::shift::{ActiveModel, Entity, Model};

use crate::{
    model::catalog::{CreateShiftDto, UpdateShiftDto},
    server::{
        data::resource::{patch, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Turno", "Shift");

pub struct ShiftResource;

#[async_trait]
impl Resource for ShiftResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateShiftDto;
    type Update = UpdateShiftDto;

    const PATH: &'static str = "/api/shifts";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["name"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(input: CreateShiftDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            name: ActiveValue::Set(input.name),
            start_time: ActiveValue::Set(input.start_time),
            end_time: ActiveValue::Set(input.end_time),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(current: Model, patch_dto: UpdateShiftDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.name, patch_dto.name);
        patch(&mut model.start_time, patch_dto.start_time);
        patch(&mut model.end_time, patch_dto.end_time);

        Ok(model)
    }
}
