use super::*;

/// Tests creating a maintenance record.
///
/// Verifies that the aircraft tail number is joined in and optional fields round-trip.
///
/// Expected: Ok with record created
#[tokio::test]
async fn creates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .tail_number("N210MX")
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);
    let record = repo.create(params(aircraft.id)).await?;

    assert_eq!(record.aircraft_id, aircraft.id);
    assert_eq!(record.aircraft_tail_number, "N210MX");
    assert_eq!(record.check_type, MaintenanceCheckType::HundredHour);
    assert_eq!(record.next_due_hours, Some(2200.0));
    assert_eq!(record.next_due_date, Some(date(2026, 11, 1)));
    assert_eq!(record.cost, Some(1450.75));
    assert_eq!(record.notes, None);

    Ok(())
}
