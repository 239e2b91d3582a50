//! Daily birthday reminder sent to HR staff.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    model::notification::BirthdayReportDto,
    server::{
        config::Config,
        data::{
            business_unit::BusinessUnitRepository, employee::EmployeeRepository,
            user::UserRepository,
        },
        error::AppError,
        external::mail::{Email, Mailer},
    },
};

/// Returns true when someone born on `birthday` celebrates on `day`.
///
/// People born on February 29 celebrate on February 28 in common years.
pub fn celebrates_on(birthday: NaiveDate, day: NaiveDate) -> bool {
    if birthday.month() == day.month() && birthday.day() == day.day() {
        return true;
    }

    birthday.month() == 2
        && birthday.day() == 29
        && day.month() == 2
        && day.day() == 28
        && NaiveDate::from_ymd_opt(day.year(), 2, 29).is_none()
}

/// Completed years on `day` for someone celebrating that day.
pub fn age_on(birthday: NaiveDate, day: NaiveDate) -> i32 {
    day.year() - birthday.year()
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One employee line of the reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayEntry {
    pub full_name: String,
    pub business_unit: String,
    pub age: i32,
}

/// Renders the reminder body listing `entries`.
pub fn render_email(recipient_name: &str, day: NaiveDate, entries: &[BirthdayEntry]) -> String {
    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&entry.full_name),
                escape_html(&entry.business_unit),
                entry.age
            )
        })
        .collect();

    format!(
        "<html><body>\
         <p>Hola {},</p>\
         <p>Estos colaboradores celebran su cumpleaños hoy ({}):</p>\
         <table><thead><tr><th>Nombre</th><th>Unidad de negocio</th><th>Edad</th></tr></thead>\
         <tbody>{}</tbody></table>\
         </body></html>",
        escape_html(recipient_name),
        day.format("%d/%m/%Y"),
        rows
    )
}

pub struct BirthdayReminderService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    config: &'a Config,
}

impl<'a> BirthdayReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer, config: &'a Config) -> Self {
        Self { db, mailer, config }
    }

    /// Emails every HR user the employees celebrating on `day` in the active
    /// business units they can access.
    ///
    /// Users with nothing to report get no email. A failed delivery is logged
    /// and counted; the remaining recipients are still processed.
    ///
    /// # Returns
    /// - `Ok(BirthdayReportDto)` - Employees found plus sent and failed deliveries
    /// - `Err(AppError)` - Database error while collecting recipients
    pub async fn run(&self, day: NaiveDate) -> Result<BirthdayReportDto, AppError> {
        let units = BusinessUnitRepository::new(self.db)
            .find_active_by_slugs(&self.config.active_business_units)
            .await?;
        if units.is_empty() {
            tracing::info!("No active business units configured; skipping birthday reminders");
            return Ok(BirthdayReportDto::default());
        }

        let unit_ids: Vec<i32> = units.iter().map(|unit| unit.id).collect();
        let celebrating: Vec<entity::employee::Model> = EmployeeRepository::new(self.db)
            .find_with_birthday_in_units(&unit_ids)
            .await?
            .into_iter()
            .filter(|employee| employee.birthday.is_some_and(|birthday| celebrates_on(birthday, day)))
            .collect();

        let mut report = BirthdayReportDto {
            employees: celebrating.len(),
            ..Default::default()
        };
        if celebrating.is_empty() {
            tracing::info!("No birthdays on {}", day);
            return Ok(report);
        }

        let units_by_id: HashMap<i32, &entity::business_unit::Model> =
            units.iter().map(|unit| (unit.id, unit)).collect();

        let recipients = UserRepository::new(self.db)
            .find_by_role(&self.config.birthday_notify_role)
            .await?;

        for recipient in recipients {
            let entries: Vec<BirthdayEntry> = celebrating
                .iter()
                .filter_map(|employee| {
                    let unit = units_by_id.get(&employee.business_unit_id)?;
                    if !recipient.can_access(&unit.slug) {
                        return None;
                    }
                    let birthday = employee.birthday?;

                    Some(BirthdayEntry {
                        full_name: employee.full_name(),
                        business_unit: unit.name.clone(),
                        age: age_on(birthday, day),
                    })
                })
                .collect();

            if entries.is_empty() {
                continue;
            }

            let email = Email {
                from: self.config.mail.from.clone(),
                to: recipient.email.clone(),
                subject: format!("Cumpleaños del día {}", day.format("%d/%m/%Y")),
                html: render_email(&recipient.name, day, &entries),
            };

            match self.mailer.send(&email).await {
                Ok(()) => {
                    report.sent += 1;
                    tracing::info!(
                        "Sent birthday reminder to {} listing {} employee(s)",
                        recipient.email,
                        entries.len()
                    );
                }
                Err(err) => {
                    report.failed += 1;
                    tracing::error!("Failed to send birthday reminder to {}: {}", recipient.email, err);
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn matches_month_and_day() {
        assert!(celebrates_on(date(1990, 5, 17), date(2024, 5, 17)));
        assert!(!celebrates_on(date(1990, 5, 17), date(2024, 5, 18)));
        assert_eq!(age_on(date(1990, 5, 17), date(2024, 5, 17)), 34);
    }

    #[test]
    fn leap_day_birthdays_fall_back_to_february_28() {
        assert!(celebrates_on(date(2000, 2, 29), date(2023, 2, 28)));
        assert!(!celebrates_on(date(2000, 2, 29), date(2024, 2, 28)));
        assert!(celebrates_on(date(2000, 2, 29), date(2024, 2, 29)));
    }

    #[test]
    fn escapes_names_in_email() {
        let html = render_email(
            "Ana <RH>",
            date(2024, 5, 17),
            &[BirthdayEntry {
                full_name: "Luis & Co".to_string(),
                business_unit: "Norte".to_string(),
                age: 30,
            }],
        );

        assert!(html.contains("Ana &lt;RH&gt;"));
        assert!(html.contains("Luis &amp; Co"));
        assert!(html.contains("17/05/2024"));
    }
}
