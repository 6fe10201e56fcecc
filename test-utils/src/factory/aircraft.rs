//! Aircraft factory for creating test aircraft entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{AircraftCategory, AircraftStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test aircraft with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::aircraft::AircraftFactory;
///
/// let aircraft = AircraftFactory::new(&db)
///     .tail_number("N12345")
///     .status(AircraftStatus::Grounded)
///     .total_airframe_hours(1200.0)
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    tail_number: String,
    make: String,
    model_name: String,
    year: i32,
    category: AircraftCategory,
    total_airframe_hours: f64,
    status: AircraftStatus,
    engine_count: i32,
    max_passengers: i32,
    owner_id: Option<Uuid>,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory with default values.
    ///
    /// Defaults:
    /// - tail_number: `"N{id}T"` where id is auto-incremented
    /// - make / model: `"Cessna"` / `"172S"`
    /// - year: `2005`
    /// - category: `AircraftCategory::SingleEngineLand`
    /// - total_airframe_hours: `1000.0`
    /// - status: `AircraftStatus::Airworthy`
    /// - engine_count: `1`, max_passengers: `3`
    /// - owner_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            tail_number: format!("N{}T", id),
            make: "Cessna".to_string(),
            model_name: "172S".to_string(),
            year: 2005,
            category: AircraftCategory::SingleEngineLand,
            total_airframe_hours: 1000.0,
            status: AircraftStatus::Airworthy,
            engine_count: 1,
            max_passengers: 3,
            owner_id: None,
        }
    }

    pub fn tail_number(mut self, tail_number: impl Into<String>) -> Self {
        self.tail_number = tail_number.into();
        self
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn category(mut self, category: AircraftCategory) -> Self {
        self.category = category;
        self
    }

    pub fn total_airframe_hours(mut self, hours: f64) -> Self {
        self.total_airframe_hours = hours;
        self
    }

    pub fn status(mut self, status: AircraftStatus) -> Self {
        self.status = status;
        self
    }

    pub fn engine_count(mut self, engine_count: i32) -> Self {
        self.engine_count = engine_count;
        self
    }

    pub fn owner_id(mut self, owner_id: Option<Uuid>) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Builds and inserts the aircraft entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::aircraft::Model)` - Created aircraft entity
    /// - `Err(DbErr)` - Database error during insert, including duplicate tail numbers
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        let now = Utc::now();
        entity::aircraft::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            tail_number: ActiveValue::Set(self.tail_number),
            make: ActiveValue::Set(self.make),
            model_name: ActiveValue::Set(self.model_name),
            year: ActiveValue::Set(self.year),
            category: ActiveValue::Set(self.category),
            total_airframe_hours: ActiveValue::Set(self.total_airframe_hours),
            status: ActiveValue::Set(self.status),
            engine_count: ActiveValue::Set(self.engine_count),
            max_passengers: ActiveValue::Set(self.max_passengers),
            owner_id: ActiveValue::Set(self.owner_id),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airworthy single engine aircraft with default values.
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).build().await
}
