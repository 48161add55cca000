use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 100).not_null())
                    .col(string_len(Planet::Slug, 120).not_null().unique_key())
                    .col(text(Planet::Description).not_null())
                    .col(text(Planet::GltfModelUrl).not_null().default(""))
                    .col(double(Planet::DistanceFromEarthKm).not_null().default(0.0))
                    .col(integer(Planet::TravelTimeDays).not_null().default(0))
                    .col(string_len(Planet::Emoji, 16).not_null().default(""))
                    .col(
                        timestamp_with_time_zone(Planet::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Planet::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Slug,
    Description,
    GltfModelUrl,
    DistanceFromEarthKm,
    TravelTimeDays,
    Emoji,
    CreatedAt,
    UpdatedAt,
}
