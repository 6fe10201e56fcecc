use super::*;

/// Tests empty role list grants access.
///
/// Verifies that when no roles are required, any user with a valid token and a
/// database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_role_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result, user);

    Ok(())
}

/// Tests fleet manager passes the fleet management guard.
///
/// Expected: Ok(User) with role FleetManager
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let user = User::from_entity(
        factory::user::create_user_with_role(db, UserRole::FleetManager).await?,
    );
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(FLEET_MANAGEMENT)
        .await?;

    assert_eq!(result.role, UserRole::FleetManager);

    Ok(())
}

/// Tests pilot is denied the fleet management guard.
///
/// Expected: Err(AuthError::AccessDenied) naming the pilot
#[tokio::test]
async fn denies_access_to_other_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = bearer(&tokens.issue(&user)?);

    let guard = AuthGuard::new(db, &tokens, &headers);

    match guard.require(FLEET_MANAGEMENT).await {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }
    assert!(guard.require(FLIGHT_LOGGING).await.is_ok());

    Ok(())
}

/// Tests the role stored in the database wins over the role in the token.
///
/// Expected: Err(AuthError::AccessDenied) for a token claiming a role the user lacks
#[tokio::test]
async fn uses_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let stored = User::from_entity(factory::create_user(db).await?);
    let forged = User {
        role: UserRole::Admin,
        ..stored.clone()
    };
    let headers = bearer(&tokens.issue(&forged)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(FLEET_MANAGEMENT)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests requests without a usable bearer token.
///
/// Expected: Err(AuthError::MissingToken) for no header, another scheme, or an empty token
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

    for headers in [HeaderMap::new(), basic, bearer("")] {
        let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));
    let foreign = TokenService::new("other-secret", chrono::Duration::hours(1));

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = bearer(&foreign.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user is not in the database.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let stored = User::from_entity(factory::create_user(db).await?);
    let missing = User {
        id: uuid::Uuid::new_v4(),
        ..stored
    };
    let headers = bearer(&tokens.issue(&missing)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, missing.id),
        other => panic!("Expected UserNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}
