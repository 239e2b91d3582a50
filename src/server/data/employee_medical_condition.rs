use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, IntoActiveModel};

use entity::employee_medical_condition::{ActiveModel, Entity, Model};

use crate::{
    model::employee::{CreateEmployeeMedicalConditionDto, UpdateEmployeeMedicalConditionDto},
    server::{
        data::{
            employee, medical_condition,
            resource::{patch_nullable, require_live, Resource},
        },
        error::AppError,
        i18n::{Label, Locale},
        model::verification::Verification,
        util::crypto::FieldCipher,
    },
};

pub struct EmployeeMedicalConditionResource;

#[async_trait]
impl Resource for EmployeeMedicalConditionResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateEmployeeMedicalConditionDto;
    type Update = UpdateEmployeeMedicalConditionDto;

    const PATH: &'static str = "/api/employee-medical-conditions";
    const LABEL: Label = Label::new("Condición médica del empleado", "Employee medical condition");
    const UNIQUE_KEY: &'static [&'static str] = &["employee_id", "medical_condition_id"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateEmployeeMedicalConditionDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            medical_condition_id: ActiveValue::Set(input.medical_condition_id),
            notes: ActiveValue::Set(input.notes),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateEmployeeMedicalConditionDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch_nullable(&mut model.notes, patch_dto.notes);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateEmployeeMedicalConditionDto,
    ) -> Result<Verification, AppError> {
        let employee =
            require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL)
                .await?;
        if !employee.is_passed() {
            return Ok(employee);
        }

        require_live::<entity::medical_condition::Entity>(
            db,
            locale,
            input.medical_condition_id,
            medical_condition::LABEL,
        )
        .await
    }

    /// Adds the medical condition record.
    async fn present(db: &DatabaseConnection, model: Model) -> Result<serde_json::Value, AppError> {
        let condition = entity::prelude::MedicalCondition::find_by_id(model.medical_condition_id)
            .one(db)
            .await?;

        let mut value = serde_json::to_value(&model)?;
        value["medical_condition"] = serde_json::to_value(condition)?;

        Ok(value)
    }
}
