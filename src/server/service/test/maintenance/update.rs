use super::*;

/// Tests moving a record to an aircraft that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;

    let service = MaintenanceService::new(db);
    let record = service.create(params(aircraft.id)).await?;

    let result = service.update(record.id, params(Uuid::new_v4())).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get(record.id).await?.aircraft_id, aircraft.id);

    Ok(())
}

/// Expected: Ok with the new status, then Err(AppError::NotFound) after delete
#[tokio::test]
async fn updates_then_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;

    let service = MaintenanceService::new(db);
    let record = service.create(params(aircraft.id)).await?;

    let updated = service
        .update(
            record.id,
            MaintenanceParams {
                status: MaintenanceStatus::Completed,
                completed_date: Some(Utc::now().date_naive()),
                ..params(aircraft.id)
            },
        )
        .await?;
    assert_eq!(updated.status, MaintenanceStatus::Completed);

    service.delete(record.id).await?;
    assert!(matches!(service.get(record.id).await, Err(AppError::NotFound(_))));

    Ok(())
}
