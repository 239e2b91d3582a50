//! Generic persistence for catalog style resources.
//!
//! Every CRUD resource implements [`Resource`], which binds its SeaORM entity to
//! its request DTOs and business key. [`ResourceRepository`] then provides the
//! queries shared by all of them: live lookups, paginated listing, conflict
//! detection on the business key and soft (or hard) deletion.
//!
//! Column handling is driven by column names so the same code serves every
//! table: a table with a `deleted_at` column is soft deleted and filtered on it,
//! `created_at`/`updated_at` are stamped when present.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Condition, ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait,
    DatabaseConnection, DbErr, EntityName, EntityTrait, FromQueryResult, IdenStatic,
    IntoActiveModel, Iterable, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Value,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::validation::Validate,
    server::{
        error::AppError,
        i18n::{Label, Locale},
        model::{
            pagination::{Page, PageRequest},
            verification::Verification,
        },
        util::crypto::FieldCipher,
    },
};

pub const ID: &str = "id";
pub const DELETED_AT: &str = "deleted_at";
pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";

/// Binding between an entity, its DTOs and its business rules.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;
    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Route prefix, e.g. `/api/employees`.
    const PATH: &'static str;
    const LABEL: Label;
    /// Columns that together identify a live record. Empty means no conflict check.
    const UNIQUE_KEY: &'static [&'static str] = &[];

    fn id(model: &Self::Model) -> i32;

    fn into_active_model(
        input: Self::Create,
        cipher: &FieldCipher,
    ) -> Result<Self::ActiveModel, AppError>;

    /// Applies the fields present in `patch` on top of `current`.
    fn merge(
        current: Self::Model,
        patch: Self::Update,
        cipher: &FieldCipher,
    ) -> Result<Self::ActiveModel, AppError>;

    /// Secondary business rule checked before insert.
    async fn verify_create(
        _db: &DatabaseConnection,
        _locale: Locale,
        _input: &Self::Create,
    ) -> Result<Verification, AppError> {
        Ok(Verification::passed())
    }

    /// Secondary business rule checked before update.
    async fn verify_update(
        _db: &DatabaseConnection,
        _locale: Locale,
        _current: &Self::Model,
        _patch: &Self::Update,
    ) -> Result<Verification, AppError> {
        Ok(Verification::passed())
    }

    /// Response representation, possibly enriched with related records.
    async fn present(_db: &DatabaseConnection, model: Self::Model) -> Result<serde_json::Value, AppError> {
        Ok(serde_json::to_value(model)?)
    }
}

/// Overwrites `field` when the patch carries a value.
pub fn patch<V>(field: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(value) = value {
        *field = ActiveValue::Set(value);
    }
}

/// Same as [`patch`] for nullable columns.
pub fn patch_nullable<V>(field: &mut ActiveValue<Option<V>>, value: Option<V>)
where
    Option<V>: Into<Value>,
{
    if let Some(value) = value {
        *field = ActiveValue::Set(Some(value));
    }
}

/// Looks up a column of `E` by its database name.
pub fn column<E: EntityTrait>(name: &str) -> Option<E::Column> {
    E::Column::iter().find(|column| column.as_str() == name)
}

fn required_column<E: EntityTrait>(name: &str) -> Result<E::Column, DbErr> {
    column::<E>(name).ok_or_else(|| {
        DbErr::Custom(format!(
            "Table {} has no column {}",
            E::default().table_name(),
            name
        ))
    })
}

/// Excludes soft deleted rows; matches everything on tables without `deleted_at`.
pub fn live_condition<E: EntityTrait>() -> Condition {
    match column::<E>(DELETED_AT) {
        Some(deleted_at) => Condition::all().add(deleted_at.is_null()),
        None => Condition::all(),
    }
}

/// Returns true when a live row of `E` has the given id.
pub async fn exists_live<E: EntityTrait>(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr>
where
    E::Model: Sync,
{
    let count = E::find()
        .filter(required_column::<E>(ID)?.eq(id))
        .filter(live_condition::<E>())
        .count(db)
        .await?;

    Ok(count > 0)
}

/// Verification failing with 404 when the referenced row of `E` is missing.
pub async fn require_live<E: EntityTrait>(
    db: &DatabaseConnection,
    locale: Locale,
    id: i32,
    label: Label,
) -> Result<Verification, AppError>
where
    E::Model: Sync,
{
    if exists_live::<E>(db, id).await? {
        Ok(Verification::passed())
    } else {
        Ok(Verification::missing(locale, label))
    }
}

pub struct ResourceRepository<'a, R: Resource> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceRepository<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    pub fn table_name() -> String {
        R::Entity::default().table_name().to_string()
    }

    /// Gets a live record by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Record exists and is not soft deleted
    /// - `Ok(None)` - No such record, or it was soft deleted
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find()
            .filter(required_column::<R::Entity>(ID)?.eq(id))
            .filter(live_condition::<R::Entity>())
            .one(self.db)
            .await
    }

    /// Gets a record by id whether or not it was soft deleted.
    pub async fn find_by_id_with_deleted(&self, id: i32) -> Result<Option<R::Model>, DbErr> {
        R::Entity::find()
            .filter(required_column::<R::Entity>(ID)?.eq(id))
            .one(self.db)
            .await
    }

    /// Gets one page of live records ordered by id.
    ///
    /// # Arguments
    /// - `request` - 1-based page and page size
    /// - `filter` - Extra condition, e.g. restricting to one employee
    pub async fn find_page(
        &self,
        request: PageRequest,
        filter: Condition,
    ) -> Result<Page<R::Model>, DbErr> {
        let paginator = R::Entity::find()
            .filter(live_condition::<R::Entity>())
            .filter(filter)
            .order_by_asc(required_column::<R::Entity>(ID)?)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(request.index()).await?;

        Ok(Page {
            items,
            total,
            request,
        })
    }

    /// Finds a live record sharing the business key of `candidate`.
    ///
    /// Keys whose value is not set on the candidate cannot conflict. SQL NULLs
    /// never compare equal, so a key part left empty never conflicts either.
    ///
    /// # Arguments
    /// - `candidate` - Active model about to be inserted or saved
    /// - `exclude_id` - Id of the record being updated, so it does not conflict with itself
    pub async fn find_conflict(
        &self,
        candidate: &R::ActiveModel,
        exclude_id: Option<i32>,
    ) -> Result<Option<R::Model>, DbErr> {
        if R::UNIQUE_KEY.is_empty() {
            return Ok(None);
        }

        let mut condition = live_condition::<R::Entity>();
        for name in R::UNIQUE_KEY {
            let key = required_column::<R::Entity>(name)?;
            match candidate.get(key).into_value() {
                Some(value) => condition = condition.add(key.eq(value)),
                None => return Ok(None),
            }
        }

        if let Some(id) = exclude_id {
            condition = condition.add(required_column::<R::Entity>(ID)?.ne(id));
        }

        R::Entity::find().filter(condition).one(self.db).await
    }

    pub async fn insert(&self, mut model: R::ActiveModel) -> Result<R::Model, DbErr> {
        let now = Utc::now();
        if let Some(created_at) = column::<R::Entity>(CREATED_AT) {
            model.set(created_at, now.into());
        }
        if let Some(updated_at) = column::<R::Entity>(UPDATED_AT) {
            model.set(updated_at, now.into());
        }

        model.insert(self.db).await
    }

    pub async fn update(&self, mut model: R::ActiveModel) -> Result<R::Model, DbErr> {
        if let Some(updated_at) = column::<R::Entity>(UPDATED_AT) {
            model.set(updated_at, Utc::now().into());
        }

        model.update(self.db).await
    }

    /// Soft deletes the record, or removes it when the table keeps no history.
    ///
    /// # Returns
    /// - `Ok(Model)` - The record as it stands after deletion
    pub async fn delete(&self, model: R::Model) -> Result<R::Model, DbErr> {
        match column::<R::Entity>(DELETED_AT) {
            Some(deleted_at) => {
                let now = Utc::now();
                let mut active: R::ActiveModel = model.into_active_model();
                active.set(deleted_at, Some(now).into());
                if let Some(updated_at) = column::<R::Entity>(UPDATED_AT) {
                    active.set(updated_at, now.into());
                }

                active.update(self.db).await
            }
            None => {
                let active: R::ActiveModel = model.clone().into_active_model();
                active.delete(self.db).await?;

                Ok(model)
            }
        }
    }
}
