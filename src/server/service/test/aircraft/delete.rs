use super::*;

/// Tests deleting an aircraft twice.
///
/// Expected: Ok, then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_then_reports_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;

    let service = AircraftService::new(db);
    service.delete(aircraft.id).await?;

    assert!(matches!(
        service.delete(aircraft.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get(aircraft.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
