use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_uuid(Aircraft::Id))
                    .col(string_uniq(Aircraft::TailNumber))
                    .col(string(Aircraft::Make))
                    .col(string(Aircraft::Model))
                    .col(integer(Aircraft::Year))
                    .col(string(Aircraft::Category))
                    .col(double(Aircraft::TotalAirframeHours))
                    .col(string(Aircraft::Status))
                    .col(integer(Aircraft::EngineCount))
                    .col(integer(Aircraft::MaxPassengers))
                    .col(uuid_null(Aircraft::OwnerId))
                    .col(string_null(Aircraft::ImageUrl))
                    .col(timestamp_with_time_zone(Aircraft::CreatedAt))
                    .col(timestamp_with_time_zone(Aircraft::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircraft_owner_id")
                            .from(Aircraft::Table, Aircraft::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    TailNumber,
    Make,
    Model,
    Year,
    Category,
    TotalAirframeHours,
    Status,
    EngineCount,
    MaxPassengers,
    OwnerId,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
