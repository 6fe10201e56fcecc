use super::*;

/// Tests deleting an aircraft with dependent rows.
///
/// Verifies that the aircraft's flight log entries and maintenance records are
/// removed with it.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_aircraft_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, aircraft) = factory::helpers::create_pilot_with_aircraft(db).await?;
    factory::flight_log::FlightLogFactory::new(db, pilot.id, aircraft.id)
        .approach_types(&["ILS"])
        .build()
        .await?;
    factory::create_maintenance_record(db, aircraft.id).await?;

    let repo = AircraftRepository::new(db);
    assert!(repo.delete(aircraft.id).await?);

    assert!(repo.get_by_id(aircraft.id).await?.is_none());
    assert_eq!(entity::prelude::FlightLogEntry::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FlightApproachType::find().count(db).await?, 0);
    assert_eq!(entity::prelude::MaintenanceRecord::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Ok(false) when the aircraft does not exist
#[tokio::test]
async fn returns_false_for_unknown_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AircraftRepository::new(db);
    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}

/// Tests that deleting an owner keeps the aircraft and clears its owner.
///
/// Expected: aircraft remains with owner_id None
#[tokio::test]
async fn clears_owner_when_owner_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .owner_id(Some(owner.id))
        .build()
        .await?;

    entity::prelude::User::delete_by_id(owner.id).exec(db).await?;

    let repo = AircraftRepository::new(db);
    let remaining = repo.get_by_id(aircraft.id).await?.unwrap();
    assert_eq!(remaining.owner_id, None);

    Ok(())
}
