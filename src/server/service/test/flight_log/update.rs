use super::*;

/// Tests moving an entry to an aircraft that does not exist.
///
/// Expected: Err(AppError::NotFound) with the entry unchanged
#[tokio::test]
async fn fails_for_unknown_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, aircraft) = factory::helpers::create_pilot_with_aircraft(db).await?;
    let existing = factory::create_flight_log(db, pilot.id, aircraft.id).await?;

    let service = FlightLogService::new(db);
    let result = service
        .update(existing.id, params(Uuid::new_v4(), Utc::now().date_naive(), 9.9))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(
        service.get(existing.id).await?.total_flight_time,
        existing.total_flight_time
    );

    Ok(())
}

/// Expected: Err(AppError::NotFound) for update and delete of an unknown entry
#[tokio::test]
async fn fails_for_unknown_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;

    let service = FlightLogService::new(db);
    let update = service
        .update(Uuid::new_v4(), params(aircraft.id, Utc::now().date_naive(), 1.0))
        .await;
    let delete = service.delete(Uuid::new_v4()).await;

    assert!(matches!(update, Err(AppError::NotFound(_))));
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    Ok(())
}
