//! Flight log data repository for database operations.
//!
//! A flight log entry is stored as one `flight_log_entry` row plus one
//! `flight_approach_type` row per approach. Both are always written in a single
//! transaction, and reads join the pilot and aircraft display fields in.
//!
//! Related rows are selected with subqueries over the entry filter rather than bound ID
//! lists, so a listing is not limited by SQLite's bound variable cap.

use chrono::Utc;
use sea_orm::{
    sea_query::{Query, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::flight_log::{FlightLogEntry, FlightLogParams};

pub struct FlightLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a flight log entry and its approach types for a pilot.
    ///
    /// # Returns
    /// - `Ok(FlightLogEntry)` - The created entry with pilot and aircraft fields joined
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(
        &self,
        pilot_id: Uuid,
        params: FlightLogParams,
    ) -> Result<FlightLogEntry, DbErr> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let approach_types = params.approach_types.clone();

        let txn = self.db.begin().await?;

        entity::flight_log_entry::ActiveModel {
            id: ActiveValue::Set(id),
            pilot_id: ActiveValue::Set(pilot_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Self::active_model_from_params(params)
        }
        .insert(&txn)
        .await?;

        Self::insert_approach_types(&txn, id, approach_types).await?;

        txn.commit().await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Flight log entry with id {} not found after creation",
            id
        )))
    }

    /// Gets every flight log entry, newest flight first.
    pub async fn get_all(&self) -> Result<Vec<FlightLogEntry>, DbErr> {
        self.find(Condition::all(), true).await
    }

    /// Gets a pilot's flight log entries, newest flight first.
    pub async fn get_by_pilot(&self, pilot_id: Uuid) -> Result<Vec<FlightLogEntry>, DbErr> {
        self.find(by_pilot(pilot_id), true).await
    }

    /// Gets a pilot's flight log entries, newest flight first, leaving `approach_types`
    /// empty. For totals which never look at approaches.
    pub async fn get_by_pilot_without_approaches(
        &self,
        pilot_id: Uuid,
    ) -> Result<Vec<FlightLogEntry>, DbErr> {
        self.find(by_pilot(pilot_id), false).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<FlightLogEntry>, DbErr> {
        let filter = Condition::all().add(entity::flight_log_entry::Column::Id.eq(id));

        Ok(self.find(filter, true).await?.pop())
    }

    /// Replaces every mutable field of an entry, including its approach types.
    ///
    /// The pilot and `created_at` are kept, `updated_at` is refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(FlightLogEntry))` - The updated entry
    /// - `Ok(None)` - No entry with that ID
    /// - `Err(DbErr)` - Database error, nothing is changed
    pub async fn update(
        &self,
        id: Uuid,
        params: FlightLogParams,
    ) -> Result<Option<FlightLogEntry>, DbErr> {
        if entity::prelude::FlightLogEntry::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let approach_types = params.approach_types.clone();

        let txn = self.db.begin().await?;

        entity::flight_log_entry::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Self::active_model_from_params(params)
        }
        .update(&txn)
        .await?;

        entity::prelude::FlightApproachType::delete_many()
            .filter(entity::flight_approach_type::Column::FlightLogEntryId.eq(id))
            .exec(&txn)
            .await?;

        Self::insert_approach_types(&txn, id, approach_types).await?;

        txn.commit().await?;

        self.get_by_id(id).await
    }

    /// Deletes an entry, its approach types cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - No entry with that ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::FlightLogEntry::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn insert_approach_types<C: ConnectionTrait>(
        conn: &C,
        flight_log_entry_id: Uuid,
        approach_types: Vec<String>,
    ) -> Result<(), DbErr> {
        for (position, approach_type) in approach_types.into_iter().enumerate() {
            entity::flight_approach_type::ActiveModel {
                flight_log_entry_id: ActiveValue::Set(flight_log_entry_id),
                position: ActiveValue::Set(position as i32),
                approach_type: ActiveValue::Set(approach_type),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }

        Ok(())
    }

    /// Loads the entries matching `filter`, newest flight first, with pilots, aircraft
    /// and optionally approach types joined on.
    ///
    /// Each related table is fetched in one query regardless of the number of entries.
    async fn find(
        &self,
        filter: Condition,
        with_approaches: bool,
    ) -> Result<Vec<FlightLogEntry>, DbErr> {
        let entries = entity::prelude::FlightLogEntry::find()
            .filter(filter.clone())
            .order_by_desc(entity::flight_log_entry::Column::Date)
            .order_by_desc(entity::flight_log_entry::Column::CreatedAt)
            .all(self.db)
            .await?;

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let pilots_map: HashMap<Uuid, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.in_subquery(matching(
                entity::flight_log_entry::Column::PilotId,
                filter.clone(),
            )))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let aircraft_map: HashMap<Uuid, entity::aircraft::Model> =
            entity::prelude::Aircraft::find()
                .filter(entity::aircraft::Column::Id.in_subquery(matching(
                    entity::flight_log_entry::Column::AircraftId,
                    filter.clone(),
                )))
                .all(self.db)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect();

        let mut approaches_map: HashMap<Uuid, Vec<String>> = HashMap::new();
        if with_approaches {
            for approach in entity::prelude::FlightApproachType::find()
                .filter(
                    entity::flight_approach_type::Column::FlightLogEntryId
                        .in_subquery(matching(entity::flight_log_entry::Column::Id, filter)),
                )
                .order_by_asc(entity::flight_approach_type::Column::Position)
                .all(self.db)
                .await?
            {
                approaches_map
                    .entry(approach.flight_log_entry_id)
                    .or_default()
                    .push(approach.approach_type);
            }
        }

        Ok(entries
            .into_iter()
            .map(|entry| {
                let approach_types = approaches_map.remove(&entry.id).unwrap_or_default();
                let pilot = pilots_map.get(&entry.pilot_id);
                let aircraft = aircraft_map.get(&entry.aircraft_id);
                FlightLogEntry::from_entity(entry, pilot, aircraft, approach_types)
            })
            .collect())
    }

    fn active_model_from_params(params: FlightLogParams) -> entity::flight_log_entry::ActiveModel {
        entity::flight_log_entry::ActiveModel {
            id: ActiveValue::NotSet,
            pilot_id: ActiveValue::NotSet,
            aircraft_id: ActiveValue::Set(params.aircraft_id),
            date: ActiveValue::Set(params.date),
            departure_airport: ActiveValue::Set(params.departure_airport),
            arrival_airport: ActiveValue::Set(params.arrival_airport),
            total_flight_time: ActiveValue::Set(params.total_flight_time),
            pic_time: ActiveValue::Set(params.pic_time),
            sic_time: ActiveValue::Set(params.sic_time),
            dual_received_time: ActiveValue::Set(params.dual_received_time),
            solo_time: ActiveValue::Set(params.solo_time),
            night_time: ActiveValue::Set(params.night_time),
            ifr_time: ActiveValue::Set(params.ifr_time),
            cross_country_time: ActiveValue::Set(params.cross_country_time),
            day_landings: ActiveValue::Set(params.day_landings),
            night_landings: ActiveValue::Set(params.night_landings),
            weather_condition: ActiveValue::Set(params.weather_condition),
            flight_rule: ActiveValue::Set(params.flight_rule),
            remarks: ActiveValue::Set(params.remarks),
            simulator_time: ActiveValue::Set(params.simulator_time),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::NotSet,
        }
    }
}

fn by_pilot(pilot_id: Uuid) -> Condition {
    Condition::all().add(entity::flight_log_entry::Column::PilotId.eq(pilot_id))
}

/// Selects `column` from the entries matching `filter`, for use as an `IN` subquery.
fn matching(column: entity::flight_log_entry::Column, filter: Condition) -> SelectStatement {
    Query::select()
        .column(column)
        .from(entity::prelude::FlightLogEntry)
        .cond_where(filter)
        .to_owned()
}
