use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use entity::address::{ActiveModel, Entity, Model};

use crate::{
    model::employee::{CreateAddressDto, UpdateAddressDto},
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

pub const LABEL: Label = Label::new("Domicilio", "Address");

/// Home address; an employee has at most one live address.
pub struct AddressResource;

#[async_trait]
impl Resource for AddressResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateAddressDto;
    type Update = UpdateAddressDto;

    const PATH: &'static str = "/api/addresses";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["employee_id"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(input: CreateAddressDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            street: ActiveValue::Set(input.street),
            exterior_number: ActiveValue::Set(input.exterior_number),
            interior_number: ActiveValue::Set(input.interior_number),
            neighborhood: ActiveValue::Set(input.neighborhood),
            city: ActiveValue::Set(input.city),
            state: ActiveValue::Set(input.state),
            zip_code: ActiveValue::Set(input.zip_code),
            country: ActiveValue::Set(input.country),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(current: Model, patch_dto: UpdateAddressDto, _cipher: &FieldCipher) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.street, patch_dto.street);
        patch(&mut model.exterior_number, patch_dto.exterior_number);
        patch_nullable(&mut model.interior_number, patch_dto.interior_number);
        patch_nullable(&mut model.neighborhood, patch_dto.neighborhood);
        patch(&mut model.city, patch_dto.city);
        patch(&mut model.state, patch_dto.state);
        patch(&mut model.zip_code, patch_dto.zip_code);
        patch(&mut model.country, patch_dto.country);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateAddressDto,
    ) -> Result<Verification, AppError> {
        require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL).await
    }
}
