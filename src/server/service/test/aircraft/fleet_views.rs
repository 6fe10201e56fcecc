use super::*;

/// Tests fleet stats computed from stored aircraft and maintenance records.
///
/// Expected: Ok with status counts, check counts, and summed hours
#[tokio::test]
async fn computes_fleet_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();

    let airworthy = factory::aircraft::AircraftFactory::new(db)
        .total_airframe_hours(1500.0)
        .build()
        .await?;
    factory::aircraft::AircraftFactory::new(db)
        .status(AircraftStatus::Grounded)
        .total_airframe_hours(500.5)
        .build()
        .await?;

    factory::maintenance::MaintenanceFactory::new(db, airworthy.id)
        .status(MaintenanceStatus::Overdue)
        .build()
        .await?;
    factory::maintenance::MaintenanceFactory::new(db, airworthy.id)
        .status(MaintenanceStatus::Due)
        .next_due_date(Some(today + Duration::days(10)))
        .build()
        .await?;
    factory::maintenance::MaintenanceFactory::new(db, airworthy.id)
        .status(MaintenanceStatus::Due)
        .next_due_date(Some(today + Duration::days(90)))
        .build()
        .await?;

    let stats = AircraftService::new(db).fleet_stats().await?;

    assert_eq!(stats.total_aircraft, 2);
    assert_eq!(stats.airworthy_count, 1);
    assert_eq!(stats.grounded_count, 1);
    assert_eq!(stats.maintenance_count, 0);
    assert_eq!(stats.overdue_checks, 1);
    assert_eq!(stats.due_soon_checks, 1);
    assert_eq!(stats.total_fleet_hours, 2000.5);

    Ok(())
}

/// Tests alerts built from stored records.
///
/// Completed checks raise no alert, the rest are ordered most urgent first.
///
/// Expected: Ok with alerts sorted by urgency
#[tokio::test]
async fn lists_alerts_most_urgent_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .tail_number("N1200A")
        .total_airframe_hours(1200.0)
        .build()
        .await?;

    factory::maintenance::MaintenanceFactory::new(db, aircraft.id)
        .status(MaintenanceStatus::Due)
        .next_due_hours(Some(1400.0))
        .next_due_date(Some(today + Duration::days(120)))
        .build()
        .await?;
    factory::maintenance::MaintenanceFactory::new(db, aircraft.id)
        .status(MaintenanceStatus::Due)
        .next_due_hours(Some(1205.0))
        .next_due_date(Some(today + Duration::days(20)))
        .build()
        .await?;
    factory::maintenance::MaintenanceFactory::new(db, aircraft.id)
        .status(MaintenanceStatus::Completed)
        .next_due_hours(Some(1201.0))
        .build()
        .await?;

    let alerts = AircraftService::new(db).maintenance_alerts().await?;

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].urgency, Urgency::Critical);
    assert_eq!(alerts[0].hours_until_due, 5.0);
    assert_eq!(alerts[0].days_until_due, 20);
    assert_eq!(alerts[0].tail_number, "N1200A");
    assert_eq!(alerts[1].urgency, Urgency::Info);

    Ok(())
}
