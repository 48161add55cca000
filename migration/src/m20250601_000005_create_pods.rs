use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_profiles::PodType;
use super::m20250601_000004_create_flights::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pod::Table)
                    .if_not_exists()
                    .col(uuid(Pod::Id).primary_key())
                    .col(uuid(Pod::FlightId).not_null())
                    .col(string_len(Pod::PodNumber, 10).not_null())
                    .col(
                        ColumnDef::new(Pod::PodType)
                            .custom(PodType::Enum)
                            .not_null(),
                    )
                    .col(decimal_len(Pod::PriceCredits, 10, 2).not_null())
                    .col(boolean(Pod::IsAvailable).not_null().default(true))
                    .col(
                        timestamp_with_time_zone(Pod::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pod_flight")
                            .from(Pod::Table, Pod::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pod_flight_number")
                    .table(Pod::Table)
                    .col(Pod::FlightId)
                    .col(Pod::PodNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pod {
    Table,
    Id,
    FlightId,
    PodNumber,
    PodType,
    PriceCredits,
    IsAvailable,
    CreatedAt,
}
