use async_trait::async_trait;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};

use entity::aircraft_pilot::{ActiveModel, Column, Entity, Model};

use crate::{
    model::aviation::{CreateAircraftPilotDto, UpdateAircraftPilotDto},
    server::{
        data::{
            aircraft, employee,
            resource::{patch, require_live, Resource},
        },
        error::AppError,
        i18n::{Label, Locale},
        model::verification::Verification,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Piloto de aeronave", "Aircraft pilot");

/// Crew assignment joining an aircraft and an employee. Assignments carry no
/// history and are removed outright.
pub struct AircraftPilotResource;

#[async_trait]
impl Resource for AircraftPilotResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateAircraftPilotDto;
    type Update = UpdateAircraftPilotDto;

    const PATH: &'static str = "/api/aircraft/{id}/pilots";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["aircraft_id", "employee_id"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateAircraftPilotDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            aircraft_id: ActiveValue::Set(input.aircraft_id),
            employee_id: ActiveValue::Set(input.employee_id),
            role: ActiveValue::Set(input.role),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateAircraftPilotDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.role, patch_dto.role);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateAircraftPilotDto,
    ) -> Result<Verification, AppError> {
        let aircraft =
            require_live::<entity::aircraft::Entity>(db, locale, input.aircraft_id, aircraft::LABEL)
                .await?;
        if !aircraft.is_passed() {
            return Ok(aircraft);
        }

        require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL).await
    }
}

pub struct AircraftPilotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftPilotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_aircraft(&self, aircraft_id: i32) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AircraftId.eq(aircraft_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }
}
