use async_trait::async_trait;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};

use entity::aircraft::{ActiveModel, Entity, Model};

use crate::{
    model::aviation::{CreateAircraftDto, UpdateAircraftDto},
    server::{
        data::resource::{patch, patch_nullable, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Aeronave", "Aircraft");

pub struct AircraftResource;

#[async_trait]
impl Resource for AircraftResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateAircraftDto;
    type Update = UpdateAircraftDto;

    const PATH: &'static str = "/api/aircraft";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["registration"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(input: CreateAircraftDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            registration: ActiveValue::Set(input.registration),
            model: ActiveValue::Set(input.model),
            serial_number: ActiveValue::Set(input.serial_number),
            active: ActiveValue::Set(input.active),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(current: Model, patch_dto: UpdateAircraftDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.registration, patch_dto.registration);
        patch(&mut model.model, patch_dto.model);
        patch_nullable(&mut model.serial_number, patch_dto.serial_number);
        patch(&mut model.active, patch_dto.active);

        Ok(model)
    }

    /// Adds the crew assigned to the aircraft.
    async fn present(db: &DatabaseConnection, model: Model) -> Result<serde_json::Value, AppError> {
        let pilots = entity::prelude::AircraftPilot::find()
            .filter(entity::aircraft_pilot::Column::AircraftId.eq(model.id))
            .order_by_asc(entity::aircraft_pilot::Column::Id)
            .all(db)
            .await?;

        let mut value = serde_json::to_value(&model)?;
        value["pilots"] = serde_json::to_value(pilots)?;

        Ok(value)
    }
}
