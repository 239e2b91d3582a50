//! Shift changes between employees.
//!
//! Listing, lookup and note edits go through the generic resource pipeline.
//! Creation and deletion handle both rows of a swap together and live in
//! `ShiftChangeService`, which uses [`ShiftChangeRepository`] inside a
//! transaction.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use entity::employee_shift_change::{ActiveModel, Column, Entity, Model};

use crate::{
    model::shift_change::{CreateShiftChangeDto, UpdateShiftChangeDto},
    server::{
        data::resource::{patch_nullable, Resource},
        error::AppError,
        i18n::Label,
        util::crypto::FieldCipher,
    },
};

pub const LABEL: Label = Label::new("Cambio de turno", "Shift change");

pub struct ShiftChangeResource;

#[async_trait]
impl Resource for ShiftChangeResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateShiftChangeDto;
    type Update = UpdateShiftChangeDto;

    const PATH: &'static str = "/api/employee-shift-changes";
    const LABEL: Label = LABEL;
    const UNIQUE_KEY: &'static [&'static str] = &["employee_id_from", "date_from"];

    fn id(model: &Model) -> i32 {
        model.id
    }

    fn into_active_model(
        input: CreateShiftChangeDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        Ok(active_model(input))
    }

    fn merge(
        current: Model,
        patch_dto: UpdateShiftChangeDto,
        _cipher: &FieldCipher,
    ) -> Result<ActiveModel, AppError> {
        let mut model = current.into_active_model();
        patch_nullable(&mut model.note, patch_dto.note);

        Ok(model)
    }
}

/// Live row for one side of a shift change, without timestamps.
fn active_model(input: CreateShiftChangeDto) -> ActiveModel {
    ActiveModel {
        employee_id_from: ActiveValue::Set(input.employee_id_from),
        shift_id_from: ActiveValue::Set(input.shift_id_from),
        date_from: ActiveValue::Set(input.date_from),
        employee_id_to: ActiveValue::Set(input.employee_id_to),
        shift_id_to: ActiveValue::Set(input.shift_id_to),
        date_to: ActiveValue::Set(input.date_to),
        is_swap: ActiveValue::Set(input.is_swap),
        note: ActiveValue::Set(input.note),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Shift change queries that must run on a transaction.
pub struct ShiftChangeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftChangeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one side of a shift change.
    ///
    /// # Arguments
    /// - `input` - The side to store; use `CreateShiftChangeDto::mirrored` for the other one
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored row
    /// - `Err(DbErr)` - Database error, including unique index violations
    pub async fn create(&self, input: CreateShiftChangeDto) -> Result<Model, DbErr> {
        let now = Utc::now();

        let mut model = active_model(input);
        model.created_at = ActiveValue::Set(now);
        model.updated_at = ActiveValue::Set(now);
        model.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets the live row an employee has for a given day, if any.
    pub async fn find_by_employee_and_date(
        &self,
        employee_id: i32,
        date: NaiveDate,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::EmployeeIdFrom.eq(employee_id))
            .filter(Column::DateFrom.eq(date))
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets the live row mirroring `side`: the other employee giving up the
    /// slot `side` received.
    pub async fn find_mirror(&self, side: &Model) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::EmployeeIdFrom.eq(side.employee_id_to))
            .filter(Column::DateFrom.eq(side.date_to))
            .filter(Column::EmployeeIdTo.eq(side.employee_id_from))
            .filter(Column::Id.ne(side.id))
            .filter(Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    pub async fn soft_delete(&self, model: Model) -> Result<Model, DbErr> {
        let now = Utc::now();
        let mut active = model.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await
    }
}
