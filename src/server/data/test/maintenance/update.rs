use super::*;

/// Tests the full-replace update of a record.
///
/// Verifies that the record can move to another aircraft and that optional fields
/// are cleared when omitted.
///
/// Expected: Ok(Some(MaintenanceRecord)) with replaced fields
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;
    let other = factory::aircraft::AircraftFactory::new(db)
        .tail_number("N88MV")
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);
    let existing = repo.create(params(aircraft.id)).await?;

    let updated = repo
        .update(
            existing.id,
            MaintenanceParams {
                status: MaintenanceStatus::Completed,
                completed_date: Some(date(2026, 5, 3)),
                squawks: None,
                cost: None,
                ..params(other.id)
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.aircraft_id, other.id);
    assert_eq!(updated.aircraft_tail_number, "N88MV");
    assert_eq!(updated.status, MaintenanceStatus::Completed);
    assert_eq!(updated.completed_date, Some(date(2026, 5, 3)));
    assert_eq!(updated.squawks, None);
    assert_eq!(updated.cost, None);
    assert_eq!(updated.created_at, existing.created_at);

    assert!(repo.update(Uuid::new_v4(), params(aircraft.id)).await?.is_none());
    assert!(repo.delete(existing.id).await?);
    assert!(repo.get_by_id(existing.id).await?.is_none());

    Ok(())
}
