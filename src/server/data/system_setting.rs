use async_trait::async_trait;
use sea_orm::{ActiveValue, IntoActiveModel};

use entity::system_setting::{ActiveModel, Entity, Model};

use crate::{
    model::setting::{CreateSystemSettingDto, UpdateSystemSettingDto},
    server::{
        data::resource::{patch, patch_nullable, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

/// Key/value application setting. Settings are removed outright on delete.
pub struct SystemSettingResource;

#[async_trait]
impl Resource for SystemSettingResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateSystemSettingDto;
    type Update = UpdateSystemSettingDto;

    const PATH: &'static str = "/api/system-settings";
    const LABEL: Label = Label::new("Configuración del sistema", "System setting");
    const UNIQUE_KEY: &'static [&'static str] = &["key"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateSystemSettingDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            key: ActiveValue::Set(input.key),
            value: ActiveValue::Set(input.value),
            description: ActiveValue::Set(input.description),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateSystemSettingDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.key, patch_dto.key);
        patch(&mut model.value, patch_dto.value);
        patch_nullable(&mut model.description, patch_dto.description);

        Ok(model)
    }
}
