use super::*;

/// Tests listing an aircraft's records.
///
/// Expected: Ok with only that aircraft's records, latest scheduled date first
#[tokio::test]
async fn lists_records_latest_scheduled_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;
    let other = factory::create_aircraft(db).await?;

    for d in [date(2025, 6, 1), date(2026, 2, 1), date(2025, 9, 15)] {
        factory::maintenance::MaintenanceFactory::new(db, aircraft.id)
            .scheduled_date(d)
            .build()
            .await?;
    }
    factory::create_maintenance_record(db, other.id).await?;

    let repo = MaintenanceRepository::new(db);
    let records = repo.get_by_aircraft(aircraft.id).await?;

    let dates: Vec<NaiveDate> = records.iter().map(|r| r.scheduled_date).collect();
    assert_eq!(dates, vec![date(2026, 2, 1), date(2025, 9, 15), date(2025, 6, 1)]);
    assert_eq!(repo.get_all().await?.len(), 4);

    Ok(())
}
