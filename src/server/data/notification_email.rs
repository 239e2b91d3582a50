use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use entity::notification_email::{ActiveModel, Entity, Model};

use crate::{
    model::setting::{CreateNotificationEmailDto, UpdateNotificationEmailDto},
    server::{
        data::{
            business_unit,
            resource::{patch, require_live, Resource},
        },
        error::AppError,
        i18n::{Label, Locale},
        model::verification::Verification,
        util::crypto::FieldCipher,
    },
};

pub struct NotificationEmailResource;

#[async_trait]
impl Resource for NotificationEmailResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateNotificationEmailDto;
    type Update = UpdateNotificationEmailDto;

    const PATH: &'static str = "/api/notification-emails";
    const LABEL: Label = Label::new("Correo de notificación", "Notification email");
    const UNIQUE_KEY: &'static [&'static str] = &["email", "business_unit_id", "kind"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateNotificationEmailDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            email: ActiveValue::Set(input.email),
            business_unit_id: ActiveValue::Set(input.business_unit_id),
            kind: ActiveValue::Set(input.kind),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateNotificationEmailDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.email, patch_dto.email);
        patch(&mut model.business_unit_id, patch_dto.business_unit_id);
        patch(&mut model.kind, patch_dto.kind);

        Ok(model)
    }

    async fn verify_create(
        db: &DatabaseConnection,
        locale: Locale,
        input: &CreateNotificationEmailDto,
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
        patch_dto: &UpdateNotificationEmailDto,
    ) -> Result<Verification, AppError> {
        match patch_dto.business_unit_id {
            Some(id) => {
                require_live::<entity::business_unit::Entity>(db, locale, id, business_unit::LABEL)
                    .await
            }
            None => Ok(Verification::passed()),
        }
    }
}
