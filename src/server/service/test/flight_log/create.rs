use super::*;

/// Tests logging a flight with an aircraft that does not exist.
///
/// Expected: Err(AppError::NotFound) and no entry persisted
#[tokio::test]
async fn fails_for_unknown_aircraft_without_persisting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;

    let result = FlightLogService::new(db)
        .create(pilot.id, params(Uuid::new_v4(), Utc::now().date_naive(), 1.0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::FlightLogEntry::find().count(db).await?, 0);

    Ok(())
}

/// Tests logging a flight for a pilot that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;

    let result = FlightLogService::new(db)
        .create(Uuid::new_v4(), params(aircraft.id, Utc::now().date_naive(), 1.0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: Ok with the entry listed for its pilot
#[tokio::test]
async fn logs_flight_for_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, aircraft) = factory::helpers::create_pilot_with_aircraft(db).await?;

    let service = FlightLogService::new(db);
    let entry = service
        .create(pilot.id, params(aircraft.id, Utc::now().date_naive(), 1.4))
        .await?;

    assert_eq!(entry.pilot_id, pilot.id);
    assert_eq!(service.list_for_pilot(pilot.id).await?, vec![entry.clone()]);
    assert_eq!(service.get(entry.id).await?, entry);

    Ok(())
}
