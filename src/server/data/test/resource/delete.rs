use super::*;

use crate::model::setting::CreateSystemSettingDto;

/// Tests that tables with `deleted_at` are soft deleted.
///
/// Expected: returned model carries deleted_at, row still present
#[tokio::test]
async fn soft_deletes_when_table_keeps_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = insert_business_unit(db, "norte").await?;

    let repo = ResourceRepository::<BusinessUnitResource>::new(db);
    let deleted = repo.delete(unit.clone()).await?;

    assert!(deleted.deleted_at.is_some());
    assert!(deleted.updated_at >= unit.updated_at);
    assert!(repo.find_by_id_with_deleted(unit.id).await?.is_some());

    Ok(())
}

/// Tests that system settings, which keep no history, are removed outright.
///
/// Expected: row no longer exists
#[tokio::test]
async fn hard_deletes_system_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<SystemSettingResource>::new(db);
    let setting = repo
        .insert(SystemSettingResource::into_active_model(
            CreateSystemSettingDto {
                key: "payroll.cutoff_day".to_string(),
                value: "15".to_string(),
                description: None,
            },
            &cipher(),
        )?)
        .await?;

    let deleted = repo.delete(setting.clone()).await?;

    assert_eq!(deleted.id, setting.id);
    assert!(repo.find_by_id_with_deleted(setting.id).await?.is_none());

    Ok(())
}
