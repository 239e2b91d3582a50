use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use entity::work_disability::{ActiveModel, Entity, Model};

use crate::{
    model::work_disability::{CreateWorkDisabilityDto, UpdateWorkDisabilityDto},
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

/// Incapacity certificate issued by the social security institute.
pub struct WorkDisabilityResource;

fn check_period(locale: Locale, start: chrono::NaiveDate, end: chrono::NaiveDate) -> Verification {
    if end < start {
        Verification::rejected(
            locale,
            locale.pick(
                "La fecha de fin no puede ser anterior a la fecha de inicio",
                "The end date cannot be earlier than the start date",
            ),
        )
    } else {
        Verification::passed()
    }
}

#[async_trait]
impl Resource for WorkDisabilityResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateWorkDisabilityDto;
    type Update = UpdateWorkDisabilityDto;

    const PATH: &'static str = "/api/work-disabilities";
    const LABEL: Label = Label::new("Incapacidad", "Work disability");
    const UNIQUE_KEY: &'static [&'static str] = &["insurance_folio"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateWorkDisabilityDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            insurance_folio: ActiveValue::Set(input.insurance_folio),
            disability_type: ActiveValue::Set(input.disability_type),
            start_date: ActiveValue::Set(input.start_date),
            end_date: ActiveValue::Set(input.end_date),
            description: ActiveValue::Set(input.description),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateWorkDisabilityDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.insurance_folio, patch_dto.insurance_folio);
        patch(&mut model.disability_type, patch_dto.disability_type);
        patch(&mut model.start_date, patch_dto.start_date);
        patch(&mut model.end_date, patch_dto.end_date);
        patch_nullable(&mut model.description, patch_dto.description);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateWorkDisabilityDto,
    ) -> Result<Verification, AppError> {
        let period = check_period(locale, input.start_date, input.end_date);
        if !period.is_passed() {
            return Ok(period);
        }

        require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL).await
    }

    /// The merged period must stay ordered.
    async fn verify_update(
        _db: &DatabaseConnection,
        locale: Locale,
        current: &Model,
        patch_dto: &UpdateWorkDisabilityDto,
    ) -> Result<Verification, AppError> {
        Ok(check_period(
            locale,
            patch_dto.start_date.unwrap_or(current.start_date),
            patch_dto.end_date.unwrap_or(current.end_date),
        ))
    }
}
