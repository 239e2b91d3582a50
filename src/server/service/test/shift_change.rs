use super::*;

use crate::{
    model::shift_change::CreateShiftChangeDto,
    server::{data::shift_change::ShiftChangeRepository, service::shift_change::ShiftChangeService},
};

struct Fixture {
    first: entity::employee::Model,
    second: entity::employee::Model,
    morning: entity::shift::Model,
    night: entity::shift::Model,
}

async fn fixture(db: &DatabaseConnection) -> Result<Fixture, AppError> {
    let (unit, first) = factory::helpers::create_employee_with_dependencies(db).await?;

    Ok(Fixture {
        first,
        second: factory::create_employee(db, unit.id).await?,
        morning: factory::create_shift(db).await?,
        night: factory::create_shift(db).await?,
    })
}

fn request(fixture: &Fixture, is_swap: bool) -> CreateShiftChangeDto {
    serde_json::from_value(json!({
        "employee_id_from": fixture.first.id,
        "shift_id_from": fixture.morning.id,
        "date_from": "2024-01-10",
        "employee_id_to": fixture.second.id,
        "shift_id_to": fixture.night.id,
        "date_to": "2024-01-11",
        "is_swap": if is_swap { "true" } else { "0" },
    }))
    .unwrap()
}

/// Tests that a swap stores the requested row plus its mirror, each audited.
///
/// Expected: two rows with sides exchanged, one `create` log per row
#[tokio::test]
async fn creates_mirrored_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;
    let actor = factory::create_user(db).await?;

    let rows = ShiftChangeService::new(db, Locale::Es)
        .create(request(&fixture, true), Some(&actor))
        .await?;

    assert_eq!(rows.len(), 2);
    let (side, mirror) = (&rows[0], &rows[1]);
    assert_eq!(side.employee_id_from, fixture.first.id);
    assert_eq!(mirror.employee_id_from, side.employee_id_to);
    assert_eq!(mirror.shift_id_from, side.shift_id_to);
    assert_eq!(mirror.date_from, side.date_to);
    assert_eq!(mirror.employee_id_to, side.employee_id_from);
    assert_eq!(mirror.date_to, side.date_from);

    for row in &rows {
        assert_eq!(
            audit_actions(db, "employee_shift_change", row.id).await,
            vec!["create"]
        );
    }

    Ok(())
}

/// Tests that a one-way change stores a single row.
#[tokio::test]
async fn creates_single_row_without_swap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;

    let rows = ShiftChangeService::new(db, Locale::Es)
        .create(request(&fixture, false), None)
        .await?;

    assert_eq!(rows.len(), 1);
    assert!(!rows[0].is_swap);

    Ok(())
}

/// Tests that an employee cannot exchange a shift with themselves.
#[tokio::test]
async fn rejects_same_employee_on_both_sides() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;

    let mut input = request(&fixture, true);
    input.employee_id_to = input.employee_id_from;

    let err = ShiftChangeService::new(db, Locale::Es)
        .create(input, None)
        .await
        .unwrap_err();

    assert_eq!(status_of(&err), Some(400));

    Ok(())
}

/// Tests that a second change for the same employee and day conflicts, and
/// that the failed attempt writes nothing.
#[tokio::test]
async fn rejects_taken_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;

    let service = ShiftChangeService::new(db, Locale::Es);
    service.create(request(&fixture, true), None).await?;

    let err = service
        .create(request(&fixture, true), None)
        .await
        .unwrap_err();
    assert_eq!(status_of(&err), Some(409));

    // The mirror side is checked too.
    let mut reverse = request(&fixture, false);
    reverse.employee_id_from = fixture.second.id;
    reverse.employee_id_to = fixture.first.id;
    reverse.date_from = chrono::NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
    let err = service.create(reverse, None).await.unwrap_err();
    assert_eq!(status_of(&err), Some(409));

    Ok(())
}

/// Tests that deleting either side of a swap soft deletes both.
///
/// Expected: both rows gone from live lookups, one `delete` log per row
#[tokio::test]
async fn deletes_mirror_with_side() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;
    let actor = factory::create_user(db).await?;

    let service = ShiftChangeService::new(db, Locale::Es);
    let rows = service.create(request(&fixture, true), None).await?;

    let deleted = service.delete(rows[1].id, Some(&actor)).await?;

    assert_eq!(deleted.len(), 2);
    assert!(deleted.iter().all(|row| row.deleted_at.is_some()));

    let repo = ShiftChangeRepository::new(db);
    for row in &rows {
        assert!(repo.find_by_id(row.id).await?.is_none());
        assert_eq!(
            audit_actions(db, "employee_shift_change", row.id).await,
            vec!["delete"]
        );
    }

    assert!(matches!(
        service.delete(rows[0].id, None).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
