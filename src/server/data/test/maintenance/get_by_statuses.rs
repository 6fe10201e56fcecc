use super::*;

/// Expected: Ok with only records in the requested statuses
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;
    for status in [
        MaintenanceStatus::Due,
        MaintenanceStatus::Overdue,
        MaintenanceStatus::Completed,
        MaintenanceStatus::InProgress,
    ] {
        factory::maintenance::MaintenanceFactory::new(db, aircraft.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = MaintenanceRepository::new(db);
    let records = repo
        .get_by_statuses(&[MaintenanceStatus::Due, MaintenanceStatus::Overdue])
        .await?;

    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|r| matches!(r.status, MaintenanceStatus::Due | MaintenanceStatus::Overdue)));
    assert!(repo.get_by_statuses(&[]).await?.is_empty());

    Ok(())
}
