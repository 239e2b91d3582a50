use async_trait::async_trait;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};

use entity::employee::{ActiveModel, Column, Entity, Model};

use crate::{
    model::employee::{CreateEmployeeDto, UpdateEmployeeDto},
    server::{
        data::{
            business_unit,
            resource::{patch, patch_nullable, require_live, Resource},
        },
        error::AppError,
        i18n::{Label, Locale},
        model::verification::Verification,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Empleado", "Employee");

pub struct EmployeeResource;

#[async_trait]
impl Resource for EmployeeResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateEmployeeDto;
    type Update = UpdateEmployeeDto;

    const PATH: &'static str = "/api/employees";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["code"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateEmployeeDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            code: ActiveValue::Set(input.code),
            first_name: ActiveValue::Set(input.first_name),
            last_name: ActiveValue::Set(input.last_name),
            second_last_name: ActiveValue::Set(input.second_last_name),
            email: ActiveValue::Set(input.email),
            phone: ActiveValue::Set(input.phone),
            birthday: ActiveValue::Set(input.birthday),
            hire_date: ActiveValue::Set(input.hire_date),
            business_unit_id: ActiveValue::Set(input.business_unit_id),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateEmployeeDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.code, patch_dto.code);
        patch(&mut model.first_name, patch_dto.first_name);
        patch(&mut model.last_name, patch_dto.last_name);
        patch_nullable(&mut model.second_last_name, patch_dto.second_last_name);
        patch_nullable(&mut model.email, patch_dto.email);
        patch_nullable(&mut model.phone, patch_dto.phone);
        patch_nullable(&mut model.birthday, patch_dto.birthday);
        patch_nullable(&mut model.hire_date, patch_dto.hire_date);
        patch(&mut model.business_unit_id, patch_dto.business_unit_id);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateEmployeeDto,
    ) -> Result<Verification, AppError> {
        require_live::<entity::business_unit::Entity>(
            db,
            locale,
            input.business_unit_id,
            business_unit::LABEL,
        )
        .await
    }

    async fn verify_update(
        db: &DatabaseConnection,
        locale: Locale,
        _current: &Model,
        patch_dto: &UpdateEmployeeDto,
    ) -> Result<Verification, AppError> {
        match patch_dto.business_unit_id {
            Some(id) => {
                require_live::<entity::business_unit::Entity>(db, locale, id, business_unit::LABEL)
                    .await
            }
            None => Ok(Verification::passed()),
        }
    }

    /// Adds the business unit and the live address.
    async fn present(db: &DatabaseConnection, model: Model) -> Result<serde_json::Value, AppError> {
        let business_unit = entity::prelude::BusinessUnit::find_by_id(model.business_unit_id)
            .one(db)
            .await?;
        let address = entity::prelude::Address::find()
            .filter(entity::address::Column::EmployeeId.eq(model.id))
            .filter(entity::address::Column::DeletedAt.is_null())
            .one(db)
            .await?;

        let mut value = serde_json::to_value(&model)?;
        value["full_name"] = serde_json::Value::String(model.full_name());
        value["business_unit"] = serde_json::to_value(business_unit)?;
        value["address"] = serde_json::to_value(address)?;

        Ok(value)
    }
}

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets live employees of the given business units that have a birthday on file.
    ///
    /// # Arguments
    /// - `business_unit_ids` - Units to search
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching employees ordered by id
    /// - `Err(DbErr)` - Database error
    pub async fn find_with_birthday_in_units(
        &self,
        business_unit_ids: &[i32],
    ) -> Result<Vec<Model>, DbErr> {
        if business_unit_ids.is_empty() {
            return Ok(Vec::new());
        }

        Entity::find()
            .filter(Column::BusinessUnitId.is_in(business_unit_ids.iter().copied()))
            .filter(Column::Birthday.is_not_null())
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }
}
