use super::*;

/// Tests pagination metadata and that soft deleted rows are not counted.
///
/// Expected: 3 live units over pages of 2, second page holds one row
#[tokio::test]
async fn paginates_live_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<BusinessUnitResource>::new(db);
    for slug in ["norte", "sur", "centro"] {
        insert_business_unit(db, slug).await?;
    }
    let deleted = insert_business_unit(db, "oeste").await?;
    repo.delete(deleted).await?;

    let page = repo
        .find_page(PageRequest { page: 2, per_page: 2 }, Condition::all())
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "centro");

    let meta = page.meta();
    assert_eq!(meta.last_page, 2);
    assert_eq!(meta.current_page, 2);
    assert_eq!(meta.first_page, 1);

    Ok(())
}

/// Tests that a page past the end is empty but keeps the total.
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    insert_business_unit(db, "norte").await?;

    let page = ResourceRepository::<BusinessUnitResource>::new(db)
        .find_page(PageRequest { page: 5, per_page: 10 }, Condition::all())
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}
