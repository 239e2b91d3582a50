use super::*;

use crate::server::{
    config::Config,
    external::mail::testing::RecordingMailer,
    service::birthday::BirthdayReminderService,
};

fn day() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

/// Seeds the `norte` unit with one employee celebrating on `day()` and one not,
/// plus an inactive `sur` unit with a celebrating employee.
async fn seed(db: &DatabaseConnection) -> Result<entity::employee::Model, AppError> {
    let norte = factory::business_unit::BusinessUnitFactory::new(db)
        .slug("norte")
        .build()
        .await?;
    let sur = factory::business_unit::BusinessUnitFactory::new(db)
        .slug("sur")
        .build()
        .await?;

    let celebrating = factory::employee::EmployeeFactory::new(db, norte.id)
        .first_name("Ana")
        .last_name("López")
        .birthday(chrono::NaiveDate::from_ymd_opt(1990, 5, 17))
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, norte.id)
        .birthday(chrono::NaiveDate::from_ymd_opt(1990, 6, 1))
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, sur.id)
        .birthday(chrono::NaiveDate::from_ymd_opt(1980, 5, 17))
        .build()
        .await?;

    Ok(celebrating)
}

/// Tests that each HR user with access to the unit gets one email listing the
/// celebrating employee and their age.
///
/// Expected: one email to the `rh` user with access, none to others
#[tokio::test]
async fn sends_one_email_per_hr_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::for_tests();
    let mailer = RecordingMailer::default();

    seed(db).await?;
    factory::user::UserFactory::new(db)
        .email("rh.norte@example.com")
        .role("rh")
        .business_access("norte")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("rh.sur@example.com")
        .role("rh")
        .business_access("sur")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .role("admin")
        .business_access("norte")
        .build()
        .await?;

    let report = BirthdayReminderService::new(db, &mailer, &config)
        .run(day())
        .await?;

    assert_eq!(report.employees, 1);
    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 0);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "rh.norte@example.com");
    assert_eq!(sent[0].from, config.mail.from);
    assert!(sent[0].html.contains("Ana López"));
    assert!(sent[0].html.contains("<td>34</td>"));

    Ok(())
}

/// Tests that a failed delivery is counted and the batch carries on.
#[tokio::test]
async fn continues_after_failed_delivery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::for_tests();
    let mailer = RecordingMailer::failing_for(&["broken@example.com"]);

    seed(db).await?;
    for email in ["broken@example.com", "ok@example.com"] {
        factory::user::UserFactory::new(db)
            .email(email)
            .role("rh")
            .business_access("norte")
            .build()
            .await?;
    }

    let report = BirthdayReminderService::new(db, &mailer, &config)
        .run(day())
        .await?;

    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(mailer.sent()[0].to, "ok@example.com");

    Ok(())
}

/// Tests that nothing is sent on a day without birthdays.
#[tokio::test]
async fn sends_nothing_without_birthdays() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = Config::for_tests();
    let mailer = RecordingMailer::default();

    seed(db).await?;
    factory::create_user(db).await?;

    let report = BirthdayReminderService::new(db, &mailer, &config)
        .run(chrono::NaiveDate::from_ymd_opt(2024, 12, 25).unwrap())
        .await?;

    assert_eq!(report.employees, 0);
    assert!(mailer.sent().is_empty());

    Ok(())
}
