use super::*;

/// Tests that each side of a swap finds the other as its mirror.
///
/// Expected: Ok(Some(other side)) from both directions
#[tokio::test]
async fn finds_mirror_from_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;

    let repo = ShiftChangeRepository::new(db);
    let input = swap(&fixture);
    let first = repo.create(input.mirrored()).await?;
    let second = repo.create(input).await?;

    assert_eq!(repo.find_mirror(&first).await?.map(|m| m.id), Some(second.id));
    assert_eq!(repo.find_mirror(&second).await?.map(|m| m.id), Some(first.id));

    Ok(())
}

/// Tests that a soft deleted mirror is not returned.
#[tokio::test]
async fn ignores_deleted_mirror() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;

    let repo = ShiftChangeRepository::new(db);
    let input = swap(&fixture);
    let mirror = repo.create(input.mirrored()).await?;
    let side = repo.create(input).await?;

    repo.soft_delete(mirror).await?;

    assert!(repo.find_mirror(&side).await?.is_none());

    Ok(())
}

/// Tests the per-day lookup used by the conflict check.
#[tokio::test]
async fn finds_live_row_by_employee_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;

    let repo = ShiftChangeRepository::new(db);
    let side = repo.create(swap(&fixture)).await?;

    let found = repo
        .find_by_employee_and_date(fixture.first.id, date(2024, 1, 10))
        .await?;
    assert_eq!(found.map(|row| row.id), Some(side.id));

    assert!(repo
        .find_by_employee_and_date(fixture.first.id, date(2024, 1, 11))
        .await?
        .is_none());

    repo.soft_delete(side).await?;
    assert!(repo
        .find_by_employee_and_date(fixture.first.id, date(2024, 1, 10))
        .await?
        .is_none());

    Ok(())
}
