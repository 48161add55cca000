use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250601_000003_create_planets::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(FlightStatus::Enum)
                    .values([
                        FlightStatus::Scheduled,
                        FlightStatus::InProgress,
                        FlightStatus::Completed,
                        FlightStatus::Cancelled,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(uuid(Flight::Id).primary_key())
                    .col(string_len(Flight::FlightNumber, 20).not_null().unique_key())
                    .col(integer(Flight::OriginPlanetId).not_null())
                    .col(integer(Flight::DestinationPlanetId).not_null())
                    .col(timestamp_with_time_zone(Flight::DepartureAt).not_null())
                    .col(timestamp_with_time_zone(Flight::ArrivalAt).not_null())
                    .col(integer(Flight::SeatsTotal).not_null())
                    .col(integer(Flight::SeatsAvailable).not_null())
                    .col(decimal_len(Flight::PriceCredits, 10, 2).not_null())
                    .col(
                        ColumnDef::new(Flight::Status)
                            .custom(FlightStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Flight::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Flight::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_origin_planet")
                            .from(Flight::Table, Flight::OriginPlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_destination_planet")
                            .from(Flight::Table, Flight::DestinationPlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(FlightStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    FlightNumber,
    OriginPlanetId,
    DestinationPlanetId,
    DepartureAt,
    ArrivalAt,
    SeatsTotal,
    SeatsAvailable,
    PriceCredits,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum FlightStatus {
    #[sea_orm(iden = "flight_status")]
    Enum,
    #[sea_orm(iden = "scheduled")]
    Scheduled,
    #[sea_orm(iden = "in_progress")]
    InProgress,
    #[sea_orm(iden = "completed")]
    Completed,
    #[sea_orm(iden = "cancelled")]
    Cancelled,
}
