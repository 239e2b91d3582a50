use async_trait::async_trait;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};

use entity::business_unit::{ActiveModel, Column, Entity, Model};

use crate::{
    model::catalog::{CreateBusinessUnitDto, UpdateBusinessUnitDto},
    server::{
        data::resource::{patch, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Unidad de negocio", "Business unit");

pub struct BusinessUnitResource;

#[async_trait]
impl Resource for BusinessUnitResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateBusinessUnitDto;
    type Update = UpdateBusinessUnitDto;

    const PATH: &'static str = "/api/business-units";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["slug"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateBusinessUnitDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(ActiveModel {
            name: ActiveValue::Set(input.name),
            slug: ActiveValue::Set(input.slug),
            active: ActiveValue::Set(input.active),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
    }

    fn merge(
        current: Model,
        patch_dto: UpdateBusinessUnitDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch(&mut model.name, patch_dto.name);
        patch(&mut model.slug, patch_dto.slug);
        patch(&mut model.active, patch_dto.active);

        Ok(model)
    }
}

pub struct BusinessUnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessUnitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets live, active business units whose slug is in `slugs`.
    ///
    /// Slugs that match no unit are ignored.
    pub async fn find_active_by_slugs(&self, slugs: &[String]) -> Result<Vec<Model>, DbErr> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        Entity::find()
            .filter(Column::Slug.is_in(slugs.iter().map(String::as_str)))
            .filter(Column::Active.eq(true))
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
    }
}
