use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "flight_status")]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub flight_number: String,
    pub origin_planet_id: i32,
    pub destination_planet_id: i32,
    pub departure_at: DateTimeWithTimeZone,
    pub arrival_at: DateTimeWithTimeZone,
    pub seats_total: i32,
    pub seats_available: i32,
    pub price_credits: Decimal,
    pub status: FlightStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::OriginPlanetId",
        to = "super::planet::Column::Id"
    )]
    OriginPlanet,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::DestinationPlanetId",
        to = "super::planet::Column::Id"
    )]
    DestinationPlanet,
    #[sea_orm(has_many = "super::pod::Entity")]
    Pods,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::pod::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pods.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
