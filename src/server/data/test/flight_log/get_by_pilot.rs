use super::*;

/// Tests listing a pilot's entries.
///
/// Verifies that only the pilot's entries are returned, newest date first.
///
/// Expected: Ok with entries ordered by date descending
#[tokio::test]
async fn lists_pilot_entries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, aircraft) = factory::helpers::create_pilot_with_aircraft(db).await?;
    let other = factory::create_user(db).await?;

    for d in [date(2026, 1, 5), date(2026, 2, 20), date(2025, 12, 31)] {
        factory::flight_log::FlightLogFactory::new(db, pilot.id, aircraft.id)
            .date(d)
            .build()
            .await?;
    }
    factory::create_flight_log(db, other.id, aircraft.id).await?;

    let repo = FlightLogRepository::new(db);
    let entries = repo.get_by_pilot(pilot.id).await?;

    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2026, 2, 20), date(2026, 1, 5), date(2025, 12, 31)]);
    assert!(entries.iter().all(|e| e.pilot_id == pilot.id));

    assert_eq!(repo.get_all().await?.len(), 4);

    Ok(())
}

/// Expected: Ok with an empty list for a pilot without entries
#[tokio::test]
async fn returns_empty_for_pilot_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightLogRepository::new(db);
    assert!(repo.get_by_pilot(Uuid::new_v4()).await?.is_empty());

    Ok(())
}
