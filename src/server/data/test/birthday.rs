use super::*;

use crate::server::data::{business_unit::BusinessUnitRepository, employee::EmployeeRepository};

/// Tests that only live, active units with a configured slug are returned.
#[tokio::test]
async fn finds_active_units_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let norte = factory::business_unit::BusinessUnitFactory::new(db)
        .slug("norte")
        .build()
        .await?;
    factory::business_unit::BusinessUnitFactory::new(db)
        .slug("sur")
        .active(false)
        .build()
        .await?;
    factory::business_unit::BusinessUnitFactory::new(db)
        .slug("centro")
        .build()
        .await?;

    let slugs = vec!["norte".to_string(), "sur".to_string(), "oeste".to_string()];
    let units = BusinessUnitRepository::new(db)
        .find_active_by_slugs(&slugs)
        .await?;

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].id, norte.id);

    Ok(())
}

/// Tests that employees without a birthday or outside the units are skipped.
#[tokio::test]
async fn finds_employees_with_birthday_in_units() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_business_unit(db).await?;
    let other = factory::create_business_unit(db).await?;

    let with_birthday = factory::employee::EmployeeFactory::new(db, unit.id)
        .birthday(Some(date(1990, 5, 17)))
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, unit.id)
        .birthday(None)
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db, other.id)
        .birthday(Some(date(1985, 5, 17)))
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let found = repo.find_with_birthday_in_units(&[unit.id]).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, with_birthday.id);
    assert!(repo.find_with_birthday_in_units(&[]).await?.is_empty());

    Ok(())
}
