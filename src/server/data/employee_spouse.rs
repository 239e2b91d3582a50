use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use entity::employee_spouse::{ActiveModel, Entity, Model};

use crate::{
    model::employee::{CreateEmployeeSpouseDto, UpdateEmployeeSpouseDto},
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

pub const LABEL: Label = Label::new("Cónyuge del empleado", "Employee spouse");

/// At most one live spouse per employee.
pub struct EmployeeSpouseResource;

#[async_trait]
impl Resource for EmployeeSpouseResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateEmployeeSpouseDto;
    type Update = UpdateEmployeeSpouseDto;

    const PATH: &'static str = "/api/employee-spouses";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["employee_id"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateEmployeeSpouseDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            first_name: ActiveValue::Set(input.first_name),
            last_name: ActiveValue::Set(input.last_name),
            gender: ActiveValue::Set(input.gender),
            birthday: ActiveValue::Set(input.birthday),
            phone: ActiveValue::Set(input.phone),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateEmployeeSpouseDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.first_name, patch_dto.first_name);
        patch(&mut model.last_name, patch_dto.last_name);
        patch_nullable(&mut model.gender, patch_dto.gender);
        patch_nullable(&mut model.birthday, patch_dto.birthday);
        patch_nullable(&mut model.phone, patch_dto.phone);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateEmployeeSpouseDto,
    ) -> Result<Verification, AppError> {
        require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL).await
    }
}
