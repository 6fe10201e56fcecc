use sea_orm::entity::prelude::*;

/// One approach flown during a logged flight, kept in the order it was recorded.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_approach_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flight_log_entry_id: Uuid,
    pub position: i32,
    pub approach_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight_log_entry::Entity",
        from = "Column::FlightLogEntryId",
        to = "super::flight_log_entry::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FlightLogEntry,
}

impl Related<super::flight_log_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightLogEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
