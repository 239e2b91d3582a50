use async_trait::async_trait;
use sea_orm::{ActiveValue, IntoActiveModel};

use entity::airport::{ActiveModel, Entity, Model};

use crate::{
    model::aviation::{CreateAirportDto, UpdateAirportDto},
    server::{
        data::resource::{patch, patch_nullable, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub struct AirportResource;

#[async_trait]
impl Resource for AirportResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateAirportDto;
    type Update = UpdateAirportDto;

    const PATH: &'static str = "/api/airports";
    const LABEL: Label = Label::new("Aeropuerto", "Airport");
    const UNIQUE_KEY: &'static [&'static str] = &["iata_code"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(input: CreateAirportDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            name: ActiveValue::Set(input.name),
            iata_code: ActiveValue::Set(input.iata_code),
            icao_code: ActiveValue::Set(input.icao_code),
            city: ActiveValue::Set(input.city),
            country: ActiveValue::Set(input.country),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(current: Model, patch_dto: UpdateAirportDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.name, patch_dto.name);
        patch(&mut model.iata_code, patch_dto.iata_code);
        patch_nullable(&mut model.icao_code, patch_dto.icao_code);
        patch_nullable(&mut model.city, patch_dto.city);
        patch_nullable(&mut model.country, patch_dto.country);

        Ok(model)
    }
}
