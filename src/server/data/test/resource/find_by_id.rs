use super::*;

/// Tests that a live record is returned with its timestamps stamped.
///
/// Expected: Ok(Some(model)) with created_at == updated_at and no deleted_at
#[tokio::test]
async fn finds_live_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = insert_business_unit(db, "norte").await?;

    let found = ResourceRepository::<BusinessUnitResource>::new(db)
        .find_by_id(unit.id)
        .await?
        .expect("unit should be found");

    assert_eq!(found.slug, "norte");
    assert_eq!(found.created_at, found.updated_at);
    assert!(found.deleted_at.is_none());

    Ok(())
}

/// Tests that soft deleted records are hidden from default lookups but still
/// stored with a deletion timestamp.
///
/// Expected: find_by_id None, find_by_id_with_deleted Some with deleted_at set
#[tokio::test]
async fn hides_soft_deleted_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::helpers::create_employee_with_dependencies(db).await?.1;

    let repo = ResourceRepository::<EmployeeResource>::new(db);
    repo.delete(employee.clone()).await?;

    assert!(repo.find_by_id(employee.id).await?.is_none());

    let stored = repo
        .find_by_id_with_deleted(employee.id)
        .await?
        .expect("row should still exist");
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Tests that a missing id yields None rather than an error.
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ResourceRepository::<BusinessUnitResource>::new(db)
        .find_by_id(999)
        .await?;

    assert!(found.is_none());

    Ok(())
}
