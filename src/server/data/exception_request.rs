use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, IntoActiveModel};

use entity::exception_request::{ActiveModel, Entity, Model};

use crate::{
    model::exception_request::{CreateExceptionRequestDto, UpdateExceptionRequestDto},
    server::{
        data::{
            employee, exception_type,
            resource::{patch, patch_nullable, require_live, Resource},
        },
        error::AppError,
        i18n::{Label, Locale},
        model::verification::Verification,
        util::crypto::FieldCipher,
    },
};

pub struct ExceptionRequestResource;

#[async_trait]
impl Resource for ExceptionRequestResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateExceptionRequestDto;
    type Update = UpdateExceptionRequestDto;

    const PATH: &'static str = "/api/exception-requests";
    const LABEL: Label = Label::new("Solicitud de excepción", "Exception request");
    const UNIQUE_KEY: &'static [&'static str] = &["employee_id", "exception_type_id", "requested_date"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateExceptionRequestDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            exception_type_id: ActiveValue::Set(input.exception_type_id),
            requested_date: ActiveValue::Set(input.requested_date),
            description: ActiveValue::Set(input.description),
            status: ActiveValue::Set(input.status),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateExceptionRequestDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.requested_date, patch_dto.requested_date);
        patch_nullable(&mut model.description, patch_dto.description);
        patch(&mut model.status, patch_dto.status);

        Ok(model)
    }

    /// The employee and type must exist, and types flagged `needs_description`
    /// only accept requests that explain themselves.
    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateExceptionRequestDto,
    ) -> Result<Verification, AppError> {
        let employee =
            require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL)
                .await?;
        if !employee.is_passed() {
            return Ok(employee);
        }

        let exception_type = entity::prelude::ExceptionType::find_by_id(input.exception_type_id)
            .one(db)
            .await?
            .filter(|exception_type| exception_type.deleted_at.is_none());

        match exception_type {
            None => Ok(Verification::missing(locale, exception_type::LABEL)),
            Some(exception_type)
                if exception_type.needs_description && input.description.is_none() =>
            {
                Ok(Verification::rejected(
                    locale,
                    locale.pick(
                        "Este tipo de excepción requiere una descripción",
                        "This exception type requires a description",
                    ),
                ))
            }
            Some(_) => Ok(Verification::passed()),
        }
    }

    /// Adds the exception type.
    async fn present(db: &DatabaseConnection, model: Model) -> Result<serde_json::Value, AppError> {
        let exception_type = entity::prelude::ExceptionType::find_by_id(model.exception_type_id)
            .one(db)
            .await?;

        let mut value = serde_json::to_value(&model)?;
        value["exception_type"] = serde_json::to_value(exception_type)?;

        Ok(value)
    }
}
