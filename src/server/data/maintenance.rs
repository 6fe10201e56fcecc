//! Maintenance record data repository for database operations.

use chrono::Utc;
use entity::sea_orm_active_enums::MaintenanceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::maintenance::{MaintenanceParams, MaintenanceRecord};

pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new maintenance record with a freshly generated ID.
    pub async fn create(&self, params: MaintenanceParams) -> Result<MaintenanceRecord, DbErr> {
        let now = Utc::now();
        let id = Uuid::new_v4();

        entity::maintenance_record::ActiveModel {
            id: ActiveValue::Set(id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Self::active_model_from_params(params)
        }
        .insert(self.db)
        .await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Maintenance record with id {} not found after creation",
            id
        )))
    }

    /// Gets every maintenance record in storage order.
    pub async fn get_all(&self) -> Result<Vec<MaintenanceRecord>, DbErr> {
        let results = entity::prelude::MaintenanceRecord::find()
            .find_also_related(entity::prelude::Aircraft)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(record, aircraft)| MaintenanceRecord::from_entity(record, aircraft.as_ref()))
            .collect())
    }

    /// Gets an aircraft's maintenance records, latest scheduled date first.
    pub async fn get_by_aircraft(&self, aircraft_id: Uuid) -> Result<Vec<MaintenanceRecord>, DbErr> {
        let results = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::AircraftId.eq(aircraft_id))
            .order_by_desc(entity::maintenance_record::Column::ScheduledDate)
            .find_also_related(entity::prelude::Aircraft)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(record, aircraft)| MaintenanceRecord::from_entity(record, aircraft.as_ref()))
            .collect())
    }

    /// Gets records whose status is any of `statuses`, in storage order.
    pub async fn get_by_statuses(
        &self,
        statuses: &[MaintenanceStatus],
    ) -> Result<Vec<MaintenanceRecord>, DbErr> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let results = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::Status.is_in(statuses.iter().copied()))
            .find_also_related(entity::prelude::Aircraft)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(record, aircraft)| MaintenanceRecord::from_entity(record, aircraft.as_ref()))
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, DbErr> {
        let result = entity::prelude::MaintenanceRecord::find_by_id(id)
            .find_also_related(entity::prelude::Aircraft)
            .one(self.db)
            .await?;

        Ok(result.map(|(record, aircraft)| MaintenanceRecord::from_entity(record, aircraft.as_ref())))
    }

    /// Replaces every mutable field of a record, including the aircraft it belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(MaintenanceRecord))` - The updated record
    /// - `Ok(None)` - No record with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        params: MaintenanceParams,
    ) -> Result<Option<MaintenanceRecord>, DbErr> {
        if entity::prelude::MaintenanceRecord::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        entity::maintenance_record::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Self::active_model_from_params(params)
        }
        .update(self.db)
        .await?;

        self.get_by_id(id).await
    }

    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - No record with that ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::MaintenanceRecord::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn active_model_from_params(params: MaintenanceParams) -> entity::maintenance_record::ActiveModel {
        entity::maintenance_record::ActiveModel {
            id: ActiveValue::NotSet,
            aircraft_id: ActiveValue::Set(params.aircraft_id),
            check_type: ActiveValue::Set(params.check_type),
            status: ActiveValue::Set(params.status),
            scheduled_date: ActiveValue::Set(params.scheduled_date),
            completed_date: ActiveValue::Set(params.completed_date),
            hours_at_check: ActiveValue::Set(params.hours_at_check),
            next_due_hours: ActiveValue::Set(params.next_due_hours),
            next_due_date: ActiveValue::Set(params.next_due_date),
            technician: ActiveValue::Set(params.technician),
            squawks: ActiveValue::Set(params.squawks),
            cost: ActiveValue::Set(params.cost),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::NotSet,
        }
    }
}
