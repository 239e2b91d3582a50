//! The create/update/delete/show/index pipeline shared by every resource.

use std::marker::PhantomData;

use sea_orm::{sea_query::Condition, ColumnTrait, DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::api::IndexQueryDto,
    server::{
        data::resource::{column, Resource, ResourceRepository},
        error::AppError,
        i18n::{Locale, Message},
        model::{
            action_log::AuditAction,
            pagination::{Page, PageRequest},
            verification::Verification,
        },
        service::action_log::ActionLogService,
        util::crypto::FieldCipher,
    },
};

pub struct ResourceService<'a, R: Resource> {
    db: &'a DatabaseConnection,
    cipher: &'a FieldCipher,
    locale: Locale,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub fn new(db: &'a DatabaseConnection, cipher: &'a FieldCipher, locale: Locale) -> Self {
        Self {
            db,
            cipher,
            locale,
            resource: PhantomData,
        }
    }

    /// Checks that no other live record shares the candidate's business key.
    ///
    /// # Arguments
    /// - `candidate` - Record about to be written
    /// - `exclude_id` - Record being updated, ignored by the check
    ///
    /// # Returns
    /// - `Ok(Verification)` - Passed (`status == 200`) or a 409 conflict
    /// - `Err(AppError)` - Database error
    pub async fn verify_info_exist(
        &self,
        candidate: &R::ActiveModel,
        exclude_id: Option<i32>,
    ) -> Result<Verification, AppError> {
        let existing = ResourceRepository::<R>::new(self.db)
            .find_conflict(candidate, exclude_id)
            .await?;

        Ok(match existing {
            Some(_) => Verification::conflict(self.locale, R::LABEL),
            None => Verification::passed(),
        })
    }

    /// Validates business rules, checks for conflicts and inserts.
    pub async fn create(
        &self,
        input: R::Create,
        actor: Option<&entity::user::Model>,
    ) -> Result<R::Model, AppError> {
        R::verify_create(self.db, self.locale, &input)
            .await?
            .into_result()?;

        let candidate = R::into_active_model(input, self.cipher)?;
        self.verify_info_exist(&candidate, None)
            .await?
            .into_result()?;

        let model = ResourceRepository::<R>::new(self.db)
            .insert(candidate)
            .await
            .map_err(|err| self.conflict_or(err))?;

        self.log(actor, AuditAction::Create, &model).await?;

        Ok(model)
    }

    /// Applies a partial update. Fields absent from `patch` keep their stored
    /// values, and the merged record is checked for conflicts against every
    /// other live record.
    pub async fn update(
        &self,
        id: i32,
        patch: R::Update,
        actor: Option<&entity::user::Model>,
    ) -> Result<R::Model, AppError> {
        let current = self.show(id).await?;

        R::verify_update(self.db, self.locale, &current, &patch)
            .await?
            .into_result()?;

        let candidate = R::merge(current, patch, self.cipher)?;
        self.verify_info_exist(&candidate, Some(id))
            .await?
            .into_result()?;

        let model = ResourceRepository::<R>::new(self.db)
            .update(candidate)
            .await
            .map_err(|err| self.conflict_or(err))?;

        self.log(actor, AuditAction::Update, &model).await?;

        Ok(model)
    }

    /// Deletes a live record. Deleting it again reports not found.
    pub async fn delete(
        &self,
        id: i32,
        actor: Option<&entity::user::Model>,
    ) -> Result<R::Model, AppError> {
        let current = self.show(id).await?;

        let model = ResourceRepository::<R>::new(self.db).delete(current).await?;

        self.log(actor, AuditAction::Delete, &model).await?;

        Ok(model)
    }

    pub async fn show(&self, id: i32) -> Result<R::Model, AppError> {
        ResourceRepository::<R>::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found())
    }

    /// Lists live records page by page, optionally narrowed to one employee.
    pub async fn index(&self, query: &IndexQueryDto) -> Result<Page<R::Model>, AppError> {
        let mut filter = Condition::all();
        if let (Some(employee_id), Some(employee_column)) =
            (query.employee_id, column::<R::Entity>("employee_id"))
        {
            filter = filter.add(employee_column.eq(employee_id));
        }

        Ok(ResourceRepository::<R>::new(self.db)
            .find_page(PageRequest::from_query(query), filter)
            .await?)
    }

    pub async fn present(&self, model: R::Model) -> Result<serde_json::Value, AppError> {
        R::present(self.db, model).await
    }

    pub fn message(&self, message: Message) -> String {
        self.locale.message(message, R::LABEL)
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(self.message(Message::NotFound))
    }

    /// A unique index violation means a concurrent writer won the race after
    /// our pre-check; report it exactly like the pre-check would.
    fn conflict_or(&self, err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Verification(Verification::conflict(self.locale, R::LABEL))
            }
            _ => err.into(),
        }
    }

    async fn log(
        &self,
        actor: Option<&entity::user::Model>,
        action: AuditAction,
        model: &R::Model,
    ) -> Result<(), AppError> {
        ActionLogService::new(self.db)
            .save_action_on_log(
                actor,
                action,
                &ResourceRepository::<R>::table_name(),
                R::id(model),
                model,
            )
            .await?;

        Ok(())
    }
}
