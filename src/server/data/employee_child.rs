use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use entity::employee_child::{ActiveModel, Entity, Model};

use crate::{
    model::employee::{CreateEmployeeChildDto, UpdateEmployeeChildDto},
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

pub const LABEL: Label = Label::new("Hijo del empleado", "Employee child");

pub struct EmployeeChildResource;

#[async_trait]
impl Resource for EmployeeChildResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateEmployeeChildDto;
    type Update = UpdateEmployeeChildDto;

    const PATH: &'static str = "/api/employee-children";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["employee_id", "first_name", "birthday"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateEmployeeChildDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            first_name: ActiveValue::Set(input.first_name),
            last_name: ActiveValue::Set(input.last_name),
            gender: ActiveValue::Set(input.gender),
            birthday: ActiveValue::Set(input.birthday),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateEmployeeChildDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.first_name, patch_dto.first_name);
        patch(&mut model.last_name, patch_dto.last_name);
        patch_nullable(&mut model.gender, patch_dto.gender);
        patch(&mut model.birthday, patch_dto.birthday);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateEmployeeChildDto,
    ) -> Result<Verification, AppError> {
        require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL).await
    }
}
