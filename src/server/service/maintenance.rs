use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{aircraft::AircraftRepository, maintenance::MaintenanceRepository},
    error::AppError,
    model::maintenance::{MaintenanceParams, MaintenanceRecord},
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(MaintenanceRepository::new(self.db).get_all().await?)
    }

    /// Gets an aircraft's records, latest scheduled date first
    pub async fn list_for_aircraft(
        &self,
        aircraft_id: Uuid,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(MaintenanceRepository::new(self.db)
            .get_by_aircraft(aircraft_id)
            .await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<MaintenanceRecord, AppError> {
        MaintenanceRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a record, the aircraft must exist
    pub async fn create(&self, params: MaintenanceParams) -> Result<MaintenanceRecord, AppError> {
        self.require_aircraft(params.aircraft_id).await?;

        let record = MaintenanceRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Recorded {:?} check {} for aircraft {}",
            record.check_type,
            record.id,
            record.aircraft_id
        );

        Ok(record)
    }

    /// Replaces every field of a record, the aircraft is re-resolved and must exist
    pub async fn update(
        &self,
        id: Uuid,
        params: MaintenanceParams,
    ) -> Result<MaintenanceRecord, AppError> {
        self.require_aircraft(params.aircraft_id).await?;

        MaintenanceRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !MaintenanceRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn require_aircraft(&self, aircraft_id: Uuid) -> Result<(), AppError> {
        if AircraftRepository::new(self.db)
            .get_by_id(aircraft_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Aircraft {} not found",
                aircraft_id
            )));
        }

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Maintenance record {} not found", id))
}
