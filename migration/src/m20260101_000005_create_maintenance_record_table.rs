use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_aircraft_table::Aircraft;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecord::Table)
                    .if_not_exists()
                    .col(pk_uuid(MaintenanceRecord::Id))
                    .col(uuid(MaintenanceRecord::AircraftId))
                    .col(string(MaintenanceRecord::CheckType))
                    .col(string(MaintenanceRecord::Status))
                    .col(date(MaintenanceRecord::ScheduledDate))
                    .col(date_null(MaintenanceRecord::CompletedDate))
                    .col(double(MaintenanceRecord::HoursAtCheck))
                    .col(double_null(MaintenanceRecord::NextDueHours))
                    .col(date_null(MaintenanceRecord::NextDueDate))
                    .col(string_null(MaintenanceRecord::Technician))
                    .col(text_null(MaintenanceRecord::Squawks))
                    .col(double_null(MaintenanceRecord::Cost))
                    .col(text_null(MaintenanceRecord::Notes))
                    .col(timestamp_with_time_zone(MaintenanceRecord::CreatedAt))
                    .col(timestamp_with_time_zone(MaintenanceRecord::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_record_aircraft_id")
                            .from(MaintenanceRecord::Table, MaintenanceRecord::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRecord {
    Table,
    Id,
    AircraftId,
    CheckType,
    Status,
    ScheduledDate,
    CompletedDate,
    HoursAtCheck,
    NextDueHours,
    NextDueDate,
    Technician,
    Squawks,
    Cost,
    Notes,
    CreatedAt,
    UpdatedAt,
}
