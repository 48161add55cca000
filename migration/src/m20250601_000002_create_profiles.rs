use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250601_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Pod type enum, shared by profile preferences and pods
        manager
            .create_type(
                Type::create()
                    .as_enum(PodType::Enum)
                    .values([PodType::Standard, PodType::Luxury, PodType::Cryo])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(uuid(Profile::Id).primary_key())
                    .col(uuid(Profile::UserId).not_null().unique_key())
                    .col(text(Profile::Bio).not_null().default(""))
                    .col(string_len(Profile::PassportId, 50).not_null().default(""))
                    .col(string_len(Profile::Phone, 20).not_null().default(""))
                    .col(ColumnDef::new(Profile::DateOfBirth).date().null())
                    .col(
                        decimal_len(Profile::CreditsBalance, 14, 2)
                            .not_null()
                            .default(10000.00),
                    )
                    .col(
                        ColumnDef::new(Profile::PreferredPodType)
                            .custom(PodType::Enum)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profile::AvatarUrl).text().null())
                    .col(
                        timestamp_with_time_zone(Profile::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Profile::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_user")
                            .from(Profile::Table, Profile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(PodType::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    UserId,
    Bio,
    PassportId,
    Phone,
    DateOfBirth,
    CreditsBalance,
    PreferredPodType,
    AvatarUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum PodType {
    #[sea_orm(iden = "pod_type")]
    Enum,
    #[sea_orm(iden = "standard")]
    Standard,
    #[sea_orm(iden = "luxury")]
    Luxury,
    #[sea_orm(iden = "cryo")]
    Cryo,
}
