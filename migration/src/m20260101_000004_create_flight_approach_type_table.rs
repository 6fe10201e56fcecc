use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_flight_log_entry_table::FlightLogEntry;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightApproachType::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightApproachType::Id))
                    .col(uuid(FlightApproachType::FlightLogEntryId))
                    .col(integer(FlightApproachType::Position))
                    .col(string(FlightApproachType::ApproachType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_approach_type_flight_log_entry_id")
                            .from(
                                FlightApproachType::Table,
                                FlightApproachType::FlightLogEntryId,
                            )
                            .to(FlightLogEntry::Table, FlightLogEntry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightApproachType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightApproachType {
    Table,
    Id,
    FlightLogEntryId,
    Position,
    ApproachType,
}
