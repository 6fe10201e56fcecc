use super::*;

/// Tests stats over a pilot's stored entries.
///
/// Verifies that only the pilot's own entries count and the windows are relative to
/// the current date.
///
/// Expected: Ok(PilotStats)
#[tokio::test]
async fn computes_stats_for_pilot_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();

    let (pilot, aircraft) = factory::helpers::create_pilot_with_aircraft(db).await?;
    let other = factory::create_user(db).await?;

    let service = FlightLogService::new(db);
    service
        .create(pilot.id, params(aircraft.id, today - Duration::days(5), 1.5))
        .await?;
    service
        .create(pilot.id, params(aircraft.id, today - Duration::days(60), 2.0))
        .await?;
    service
        .create(pilot.id, params(aircraft.id, today - Duration::days(400), 4.0))
        .await?;
    service
        .create(other.id, params(aircraft.id, today, 8.0))
        .await?;

    let stats = service.pilot_stats(pilot.id).await?;

    assert_eq!(stats.total_time, 7.5);
    assert_eq!(stats.solo_time, 7.5);
    assert_eq!(stats.total_landings, 9);
    assert_eq!(stats.last_30_days, 1.5);
    assert_eq!(stats.last_90_days, 3.5);
    assert_eq!(stats.last_year, 3.5);
    assert_eq!(
        stats.by_aircraft_model,
        vec![(aircraft.model_name.clone(), 7.5)]
    );

    Ok(())
}
