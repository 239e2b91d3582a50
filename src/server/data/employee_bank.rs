//! Employee bank accounts.
//!
//! Account number and CLABE are encrypted with the application [`FieldCipher`]
//! before they reach the database; only their last four characters are kept in
//! clear text. Responses never include the ciphertext.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, IntoActiveModel};

use entity::employee_bank::{ActiveModel, Entity, Model};

use crate::{
    model::employee::{CreateEmployeeBankDto, UpdateEmployeeBankDto},
    server::{
        data::{
            bank, employee,
            resource::{patch, require_live, Resource},
        },
        error::AppError,
        i18n::{Label, Locale},
        model::verification::Verification,
        util::crypto::{last_four, FieldCipher},
    },
};

pub const LABEL: Label = Label::new("Cuenta bancaria", "Bank account");

pub struct EmployeeBankResource;

#[async_trait]
impl Resource for EmployeeBankResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateEmployeeBankDto;
    type Update = UpdateEmployeeBankDto;

    const PATH: &'static str = "/api/employee-banks";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["employee_id", "bank_id"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateEmployeeBankDto,
        cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let (clabe, clabe_last_four) = match input.clabe {
            Some(clabe) => (Some(cipher.encrypt(&clabe)?), Some(last_four(&clabe))),
            None => (None, None),
        };

        Ok(ActiveModel {
            employee_id: ActiveValue::Set(input.employee_id),
            bank_id: ActiveValue::Set(input.bank_id),
            account_number: ActiveValue::Set(cipher.encrypt(&input.account_number)?),
            account_number_last_four: ActiveValue::Set(last_four(&input.account_number)),
            clabe: ActiveValue::Set(clabe),
            clabe_last_four: ActiveValue::Set(clabe_last_four),
            currency: ActiveValue::Set(input.currency),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateEmployeeBankDto,
        cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();

        if let Some(account_number) = patch_dto.account_number {
            model.account_number = ActiveValue::Set(cipher.encrypt(&account_number)?);
            model.account_number_last_four = ActiveValue::Set(last_four(&account_number));
        }
        if let Some(clabe) = patch_dto.clabe {
            model.clabe = ActiveValue::Set(Some(cipher.encrypt(&clabe)?));
            model.clabe_last_four = ActiveValue::Set(Some(last_four(&clabe)));
        }
        patch(&mut model.currency, patch_dto.currency);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateEmployeeBankDto,
    ) -> Result<Verification, AppError> {
        let employee =
            require_live::<entity::employee::Entity>(db, locale, input.employee_id, employee::LABEL)
                .await?;
        if !employee.is_passed() {
            return Ok(employee);
        }

        require_live::<entity::bank::Entity>(db, locale, input.bank_id, bank::LABEL).await
    }

    /// Adds the bank record.
    async fn present(db: &DatabaseConnection, model: Model) -> Result<serde_json::Value, AppError> {
        let bank = entity::prelude::Bank::find_by_id(model.bank_id).one(db).await?;

        let mut value = serde_json::to_value(&model)?;
        value["bank"] = serde_json::to_value(bank)?;

        Ok(value)
    }
}

/// Decrypted account data, for callers that must hand the full numbers on.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DecryptedAccount {
    pub account_number: String,
    pub clabe: Option<String>,
}

pub fn decrypt_account(model: &Model, cipher: &FieldCipher) -> Result<DecryptedAccount, AppError> {
    Ok(DecryptedAccount {
        account_number: cipher.decrypt(&model.account_number)?,
        clabe: model
            .clabe
            .as_deref()
            .map(|clabe| cipher.decrypt(clabe))
            .transpose()?,
    })
}
