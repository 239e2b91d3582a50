use async_trait::async_trait;
use sea_orm::{ActiveValue, IntoActiveModel};

use entity::bank::{ActiveModel, Entity, Model};

use crate::{
    model::catalog::{CreateBankDto, UpdateBankDto},
    server::{
        data::resource::{patch, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Banco", "Bank");

pub struct BankResource;

#[async_trait]
impl Resource for BankResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateBankDto;
    type Update = UpdateBankDto;

    const PATH: &'static str = "/api/banks";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["code"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(input: CreateBankDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            name: ActiveValue::Set(input.name),
            code: ActiveValue::Set(input.code),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(current: Model, patch_dto: UpdateBankDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.name, patch_dto.name);
        patch(&mut model.code, patch_dto.code);

        Ok(model)
    }
}
