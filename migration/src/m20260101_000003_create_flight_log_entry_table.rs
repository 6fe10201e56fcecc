use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000002_create_aircraft_table::Aircraft,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightLogEntry::Table)
                    .if_not_exists()
                    .col(pk_uuid(FlightLogEntry::Id))
                    .col(uuid(FlightLogEntry::PilotId))
                    .col(uuid(FlightLogEntry::AircraftId))
                    .col(date(FlightLogEntry::Date))
                    .col(string(FlightLogEntry::DepartureAirport))
                    .col(string(FlightLogEntry::ArrivalAirport))
                    .col(double(FlightLogEntry::TotalFlightTime))
                    .col(double(FlightLogEntry::PicTime))
                    .col(double(FlightLogEntry::SicTime))
                    .col(double(FlightLogEntry::DualReceivedTime))
                    .col(double(FlightLogEntry::SoloTime))
                    .col(double(FlightLogEntry::NightTime))
                    .col(double(FlightLogEntry::IfrTime))
                    .col(double(FlightLogEntry::CrossCountryTime))
                    .col(integer(FlightLogEntry::DayLandings))
                    .col(integer(FlightLogEntry::NightLandings))
                    .col(string(FlightLogEntry::WeatherCondition))
                    .col(string(FlightLogEntry::FlightRule))
                    .col(text_null(FlightLogEntry::Remarks))
                    .col(double_null(FlightLogEntry::SimulatorTime))
                    .col(timestamp_with_time_zone(FlightLogEntry::CreatedAt))
                    .col(timestamp_with_time_zone(FlightLogEntry::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_log_entry_pilot_id")
                            .from(FlightLogEntry::Table, FlightLogEntry::PilotId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_log_entry_aircraft_id")
                            .from(FlightLogEntry::Table, FlightLogEntry::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_log_entry_pilot_id_date")
                    .table(FlightLogEntry::Table)
                    .col(FlightLogEntry::PilotId)
                    .col(FlightLogEntry::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightLogEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightLogEntry {
    Table,
    Id,
    PilotId,
    AircraftId,
    Date,
    DepartureAirport,
    ArrivalAirport,
    TotalFlightTime,
    PicTime,
    SicTime,
    DualReceivedTime,
    SoloTime,
    NightTime,
    IfrTime,
    CrossCountryTime,
    DayLandings,
    NightLandings,
    WeatherCondition,
    FlightRule,
    Remarks,
    SimulatorTime,
    CreatedAt,
    UpdatedAt,
}
