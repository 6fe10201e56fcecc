use super::*;

/// Tests logging in with the registered password.
///
/// Expected: Ok(AuthToken) for the registered user
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let service = AuthService::new(db, &tokens);
    let registered = service.register(register_params("maverick@example.com")).await?;

    let auth = service
        .login("maverick@example.com", "talk-to-me-goose")
        .await?;

    assert_eq!(auth.user, registered.user);
    assert_eq!(tokens.verify(&auth.token)?.sub, registered.user.id);

    Ok(())
}

/// Tests a wrong password and an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let service = AuthService::new(db, &tokens);
    service.register(register_params("maverick@example.com")).await?;

    let wrong_password = service.login("maverick@example.com", "iceman").await;
    let unknown_email = service.login("iceman@example.com", "talk-to-me-goose").await;

    for result in [wrong_password, unknown_email] {
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}
