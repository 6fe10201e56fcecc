use super::*;

/// Tests that update replaces every field and clears an omitted owner.
///
/// Expected: Ok with replaced fields
#[tokio::test]
async fn replaces_fields_and_clears_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let service = AircraftService::new(db);
    let created = service.create(params("N58BE", Some(owner.id))).await?;

    let updated = service
        .update(
            created.id,
            AircraftParams {
                status: AircraftStatus::Grounded,
                total_airframe_hours: 6133.0,
                ..params("N58BF", None)
            },
        )
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.tail_number, "N58BF");
    assert_eq!(updated.status, AircraftStatus::Grounded);
    assert_eq!(updated.total_airframe_hours, 6133.0);
    assert_eq!(updated.owner_id, None);

    Ok(())
}

/// Tests that an aircraft may keep its own tail number on update.
///
/// Expected: Ok
#[tokio::test]
async fn keeps_own_tail_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AircraftService::new(db);
    let created = service.create(params("N58BE", None)).await?;

    let updated = service.update(created.id, params("N58BE", None)).await?;

    assert_eq!(updated.tail_number, "N58BE");

    Ok(())
}

/// Tests taking another aircraft's tail number.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_tail_number_of_other_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AircraftService::new(db);
    service.create(params("N58BE", None)).await?;
    let other = service.create(params("N12XY", None)).await?;

    let result = service.update(other.id, params("N58BE", None)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AircraftService::new(db);
    let result = service.update(Uuid::new_v4(), params("N58BE", None)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.list().await?.is_empty());

    Ok(())
}
