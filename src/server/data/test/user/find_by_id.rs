use super::*;

/// Expected: Ok(Some(User)) for an existing user, Ok(None) for an unknown ID
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, UserRole::FleetManager).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.email, user.email);
    assert_eq!(found.role, UserRole::FleetManager);

    assert!(repo.find_by_id(uuid::Uuid::new_v4()).await?.is_none());

    Ok(())
}
