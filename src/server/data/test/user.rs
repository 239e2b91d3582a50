use super::*;

use crate::server::data::user::UserRepository;

/// Tests token lookup ignores soft deleted users.
#[tokio::test]
async fn finds_live_user_by_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("token-1")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert_eq!(
        repo.find_by_api_token("token-1").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_api_token("token-2").await?.is_none());

    Ok(())
}

/// Tests that only users with the requested role are returned.
#[tokio::test]
async fn finds_users_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::user::UserFactory::new(db).role("rh").build().await?;
    factory::user::UserFactory::new(db).role("admin").build().await?;

    let found = UserRepository::new(db).find_by_role("rh").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, hr.id);

    Ok(())
}
