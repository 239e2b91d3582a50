use super::*;

/// Tests that a live record with the same business key is reported.
///
/// Expected: Ok(Some(existing))
#[tokio::test]
async fn detects_live_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = insert_business_unit(db, "norte").await?;

    let candidate = BusinessUnitResource::into_active_model(business_unit("norte"), &cipher())?;
    let conflict = ResourceRepository::<BusinessUnitResource>::new(db)
        .find_conflict(&candidate, None)
        .await?;

    assert_eq!(conflict.map(|unit| unit.id), Some(existing.id));

    Ok(())
}

/// Tests that soft deleted records do not block reuse of their key.
///
/// Expected: Ok(None) and the insert succeeds
#[tokio::test]
async fn ignores_soft_deleted_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<BusinessUnitResource>::new(db);
    let existing = insert_business_unit(db, "norte").await?;
    repo.delete(existing).await?;

    let candidate = BusinessUnitResource::into_active_model(business_unit("norte"), &cipher())?;
    assert!(repo.find_conflict(&candidate, None).await?.is_none());

    let reused = repo.insert(candidate).await?;
    assert_eq!(reused.slug, "norte");

    Ok(())
}

/// Tests that the record being updated does not conflict with itself.
#[tokio::test]
async fn excludes_record_being_updated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = insert_business_unit(db, "norte").await?;

    let candidate = BusinessUnitResource::into_active_model(business_unit("norte"), &cipher())?;
    let conflict = ResourceRepository::<BusinessUnitResource>::new(db)
        .find_conflict(&candidate, Some(existing.id))
        .await?;

    assert!(conflict.is_none());

    Ok(())
}

/// Tests that the partial unique index rejects a duplicate that skipped the
/// pre-check.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn unique_index_rejects_live_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    insert_business_unit(db, "norte").await?;

    let duplicate = BusinessUnitResource::into_active_model(business_unit("norte"), &cipher())?;
    let result = ResourceRepository::<BusinessUnitResource>::new(db)
        .insert(duplicate)
        .await;

    let err = result.expect_err("duplicate slug should be rejected");
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
