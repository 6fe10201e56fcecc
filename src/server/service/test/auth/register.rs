use super::*;

/// Tests registering a new user.
///
/// Verifies that initials are derived from the name and the issued token identifies
/// the new user.
///
/// Expected: Ok(AuthToken)
#[tokio::test]
async fn registers_user_and_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let auth = AuthService::new(db, &tokens)
        .register(register_params("maverick@example.com"))
        .await?;

    assert_eq!(auth.user.name, "Pete Mitchell");
    assert_eq!(auth.user.avatar_initials, "PM");
    assert_eq!(auth.user.role, UserRole::Pilot);

    let claims = tokens.verify(&auth.token)?;
    assert_eq!(claims.sub, auth.user.id);

    Ok(())
}

/// Tests registering an email twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", chrono::Duration::hours(1));

    let service = AuthService::new(db, &tokens);
    service.register(register_params("maverick@example.com")).await?;

    let result = service.register(register_params("maverick@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
