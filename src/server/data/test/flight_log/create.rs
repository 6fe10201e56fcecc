use super::*;

/// Tests creating a flight log entry.
///
/// Verifies that the pilot and aircraft display fields are joined in and the
/// approach types keep the order they were given in.
///
/// Expected: Ok with entry created
#[tokio::test]
async fn creates_entry_with_ordered_approaches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::user::UserFactory::new(db).name("Jane Doe").build().await?;
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .tail_number("N172LB")
        .model_name("172S")
        .build()
        .await?;

    let repo = FlightLogRepository::new(db);
    let entry = repo
        .create(pilot.id, params(aircraft.id, date(2026, 3, 14)))
        .await?;

    assert_eq!(entry.pilot_id, pilot.id);
    assert_eq!(entry.pilot_name, "Jane Doe");
    assert_eq!(entry.aircraft_tail_number, "N172LB");
    assert_eq!(entry.aircraft_model, "172S");
    assert_eq!(entry.date, date(2026, 3, 14));
    assert_eq!(entry.weather_condition, WeatherCondition::Imc);
    assert_eq!(
        entry.approach_types,
        vec!["ILS 10R", "RNAV 28L", "VOR-A"]
    );

    Ok(())
}

/// Tests that a failed insert leaves nothing behind.
///
/// The aircraft ID does not exist, so the foreign key rejects the entry.
///
/// Expected: Err and no entry or approach rows persisted
#[tokio::test]
async fn persists_nothing_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;

    let repo = FlightLogRepository::new(db);
    let result = repo
        .create(pilot.id, params(Uuid::new_v4(), date(2026, 3, 14)))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::FlightLogEntry::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FlightApproachType::find().count(db).await?, 0);

    Ok(())
}
