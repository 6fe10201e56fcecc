//! Aircraft data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::aircraft::{Aircraft, AircraftParams};

pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new aircraft with a freshly generated ID.
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The created aircraft
    /// - `Err(DbErr)` - Database error during insert, including a duplicate tail number
    pub async fn create(&self, params: AircraftParams) -> Result<Aircraft, DbErr> {
        let now = Utc::now();

        let entity = entity::aircraft::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Self::active_model_from_params(params)
        }
        .insert(self.db)
        .await?;

        Ok(Aircraft::from_entity(entity))
    }

    /// Gets every aircraft in storage order.
    pub async fn get_all(&self) -> Result<Vec<Aircraft>, DbErr> {
        let entities = entity::prelude::Aircraft::find().all(self.db).await?;

        Ok(entities.into_iter().map(Aircraft::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Aircraft>, DbErr> {
        let entity = entity::prelude::Aircraft::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Aircraft::from_entity))
    }

    /// Gets the aircraft matching any of the IDs, unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Aircraft>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::aircraft::Column::TailNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Aircraft::from_entity).collect())
    }

    pub async fn find_by_tail_number(&self, tail_number: &str) -> Result<Option<Aircraft>, DbErr> {
        let entity = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::TailNumber.eq(tail_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Aircraft::from_entity))
    }

    /// Replaces every mutable field of an aircraft.
    ///
    /// `created_at` is kept and `updated_at` is refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(Aircraft))` - The updated aircraft
    /// - `Ok(None)` - No aircraft with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, params: AircraftParams) -> Result<Option<Aircraft>, DbErr> {
        if entity::prelude::Aircraft::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let entity = entity::aircraft::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Self::active_model_from_params(params)
        }
        .update(self.db)
        .await?;

        Ok(Some(Aircraft::from_entity(entity)))
    }

    /// Deletes an aircraft, its flight log entries and maintenance records cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Aircraft deleted
    /// - `Ok(false)` - No aircraft with that ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Aircraft::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn active_model_from_params(params: AircraftParams) -> entity::aircraft::ActiveModel {
        entity::aircraft::ActiveModel {
            id: ActiveValue::NotSet,
            tail_number: ActiveValue::Set(params.tail_number),
            make: ActiveValue::Set(params.make),
            model_name: ActiveValue::Set(params.model),
            year: ActiveValue::Set(params.year),
            category: ActiveValue::Set(params.category),
            total_airframe_hours: ActiveValue::Set(params.total_airframe_hours),
            status: ActiveValue::Set(params.status),
            engine_count: ActiveValue::Set(params.engine_count),
            max_passengers: ActiveValue::Set(params.max_passengers),
            owner_id: ActiveValue::Set(params.owner_id),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::NotSet,
        }
    }
}
