use super::*;
use chrono::Utc;
use sea_orm::ActiveValue;

/// Entries in a listing larger than SQLite's bound variable cap.
const LARGE_LOG: usize = 34_000;
const BATCH: usize = 1_000;

fn bulk_entry(pilot_id: Uuid, aircraft_id: Uuid, n: usize) -> entity::flight_log_entry::ActiveModel {
    let now = Utc::now();

    entity::flight_log_entry::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        pilot_id: ActiveValue::Set(pilot_id),
        aircraft_id: ActiveValue::Set(aircraft_id),
        date: ActiveValue::Set(date(2020, 1, 1) + chrono::Duration::days((n % 2000) as i64)),
        departure_airport: ActiveValue::Set("KPAO".to_string()),
        arrival_airport: ActiveValue::Set("KSQL".to_string()),
        total_flight_time: ActiveValue::Set(1.0),
        pic_time: ActiveValue::Set(1.0),
        sic_time: ActiveValue::Set(0.0),
        dual_received_time: ActiveValue::Set(0.0),
        solo_time: ActiveValue::Set(0.0),
        night_time: ActiveValue::Set(0.0),
        ifr_time: ActiveValue::Set(0.0),
        cross_country_time: ActiveValue::Set(0.0),
        day_landings: ActiveValue::Set(1),
        night_landings: ActiveValue::Set(0),
        weather_condition: ActiveValue::Set(WeatherCondition::Vmc),
        flight_rule: ActiveValue::Set(FlightRule::Vfr),
        remarks: ActiveValue::Set(None),
        simulator_time: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// Tests listing more entries than one statement may bind as variables.
///
/// Inserts a single pilot's large logbook plus one entry with approaches, then reads it
/// back through every listing.
///
/// Expected: Ok with every entry returned and the approaches still joined on
#[tokio::test]
async fn lists_logbook_beyond_variable_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, aircraft) = factory::helpers::create_pilot_with_aircraft(db).await?;
    for start in (0..LARGE_LOG).step_by(BATCH) {
        let batch = (start..start + BATCH).map(|n| bulk_entry(pilot.id, aircraft.id, n));
        entity::prelude::FlightLogEntry::insert_many(batch)
            .exec_without_returning(db)
            .await?;
    }
    let with_approaches = factory::flight_log::FlightLogFactory::new(db, pilot.id, aircraft.id)
        .date(date(2030, 1, 1))
        .approach_types(&["ILS 10R", "VOR-A"])
        .build()
        .await?;

    let repo = FlightLogRepository::new(db);

    let all = repo.get_all().await?;
    assert_eq!(all.len(), LARGE_LOG + 1);
    assert_eq!(all[0].id, with_approaches.id);
    assert_eq!(all[0].approach_types, vec!["ILS 10R", "VOR-A"]);
    assert!(all.iter().all(|e| e.aircraft_tail_number == aircraft.tail_number));

    let by_pilot = repo.get_by_pilot(pilot.id).await?;
    assert_eq!(by_pilot.len(), LARGE_LOG + 1);
    assert!(by_pilot.iter().all(|e| e.pilot_name == pilot.name));

    let without_approaches = repo.get_by_pilot_without_approaches(pilot.id).await?;
    assert_eq!(without_approaches.len(), LARGE_LOG + 1);
    assert!(without_approaches.iter().all(|e| e.approach_types.is_empty()));

    Ok(())
}
