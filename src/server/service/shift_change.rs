//! Creation and deletion of shift changes, which move both sides of a swap
//! together.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::shift_change::CreateShiftChangeDto,
    server::{
        data::{
            employee,
            resource::require_live,
            shift,
            shift_change::{ShiftChangeRepository, LABEL},
        },
        error::AppError,
        i18n::{Locale, Message},
        model::{action_log::AuditAction, verification::Verification},
        service::action_log::ActionLogService,
    },
};

const TABLE_NAME: &str = "employee_shift_change";

pub struct ShiftChangeService<'a> {
    db: &'a DatabaseConnection,
    locale: Locale,
}

impl<'a> ShiftChangeService<'a> {
    pub fn new(db: &'a DatabaseConnection, locale: Locale) -> Self {
        Self { db, locale }
    }

    /// Checks that the exchange is between two different employees and that
    /// every referenced employee and shift exists.
    pub async fn verify_info(&self, input: &CreateShiftChangeDto) -> Result<Verification, AppError> {
        if input.employee_id_from == input.employee_id_to {
            return Ok(Verification::rejected(
                self.locale,
                self.locale.pick(
                    "Un empleado no puede cambiar turno consigo mismo",
                    "An employee cannot exchange a shift with themselves",
                ),
            ));
        }

        for employee_id in [input.employee_id_from, input.employee_id_to] {
            let verification =
                require_live::<entity::employee::Entity>(self.db, self.locale, employee_id, employee::LABEL)
                    .await?;
            if !verification.is_passed() {
                return Ok(verification);
            }
        }

        for shift_id in [input.shift_id_from, input.shift_id_to] {
            let verification =
                require_live::<entity::shift::Entity>(self.db, self.locale, shift_id, shift::LABEL).await?;
            if !verification.is_passed() {
                return Ok(verification);
            }
        }

        Ok(Verification::passed())
    }

    /// Checks that neither side already has a live shift change on its day.
    pub async fn verify_info_exist(
        &self,
        input: &CreateShiftChangeDto,
    ) -> Result<Verification, AppError> {
        let repo = ShiftChangeRepository::new(self.db);

        let mut sides = vec![(input.employee_id_from, input.date_from)];
        if input.is_swap {
            sides.push((input.employee_id_to, input.date_to));
        }

        for (employee_id, date) in sides {
            if repo.find_by_employee_and_date(employee_id, date).await?.is_some() {
                return Ok(Verification::conflict(self.locale, LABEL));
            }
        }

        Ok(Verification::passed())
    }

    /// Records a shift change and, for a swap, its mirror in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The stored row, followed by its mirror for a swap
    /// - `Err(AppError::Verification)` - Same employee on both sides, a
    ///   missing employee/shift, or a side already taken on that day
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn create(
        &self,
        input: CreateShiftChangeDto,
        actor: Option<&entity::user::Model>,
    ) -> Result<Vec<entity::employee_shift_change::Model>, AppError> {
        self.verify_info(&input).await?.into_result()?;
        self.verify_info_exist(&input).await?.into_result()?;

        let mut sides = Vec::with_capacity(2);
        if input.is_swap {
            sides.push(input.mirrored());
        }
        sides.insert(0, input);

        let txn = self.db.begin().await?;
        let repo = ShiftChangeRepository::new(&txn);
        let audit = ActionLogService::new(&txn);

        let mut created = Vec::with_capacity(sides.len());
        for side in sides {
            let row = repo.create(side).await.map_err(|err| self.conflict_or(err))?;
            audit
                .save_action_on_log(actor, AuditAction::Create, TABLE_NAME, row.id, &row)
                .await?;
            created.push(row);
        }

        txn.commit().await?;

        Ok(created)
    }

    /// Soft deletes a shift change together with its mirror.
    ///
    /// A swap whose mirror is already gone is still deleted; the missing
    /// mirror is only logged.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The deleted row, followed by its mirror if found
    /// - `Err(AppError::NotFound)` - No live shift change with that id
    pub async fn delete(
        &self,
        id: i32,
        actor: Option<&entity::user::Model>,
    ) -> Result<Vec<entity::employee_shift_change::Model>, AppError> {
        let txn = self.db.begin().await?;
        let repo = ShiftChangeRepository::new(&txn);
        let audit = ActionLogService::new(&txn);

        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(self.locale.message(Message::NotFound, LABEL)))?;

        let mirror = if current.is_swap {
            let mirror = repo.find_mirror(&current).await?;
            if mirror.is_none() {
                tracing::warn!("Shift change {} is a swap but has no live mirror", current.id);
            }
            mirror
        } else {
            None
        };

        let mut deleted = Vec::with_capacity(2);
        for row in std::iter::once(current).chain(mirror) {
            let row = repo.soft_delete(row).await?;
            audit
                .save_action_on_log(actor, AuditAction::Delete, TABLE_NAME, row.id, &row)
                .await?;
            deleted.push(row);
        }

        txn.commit().await?;

        Ok(deleted)
    }

    fn conflict_or(&self, err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Verification(Verification::conflict(self.locale, LABEL))
            }
            _ => err.into(),
        }
    }
}
