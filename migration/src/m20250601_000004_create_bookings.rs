use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250601_000002_create_users::User;
use super::m20250601_000003_create_flights::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(BookingStatus::Enum)
                    .values([BookingStatus::Confirmed, BookingStatus::Cancelled])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(TripType::Enum)
                    .values([TripType::OneWay, TripType::RoundTrip])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_len(Booking::PnrNumber, 10).not_null().unique_key())
                    .col(integer(Booking::UserId).not_null())
                    .col(integer(Booking::FlightId).not_null())
                    .col(integer(Booking::NumberOfPassengers).not_null())
                    .col(decimal_len(Booking::TotalPrice, 12, 2).not_null())
                    .col(
                        ColumnDef::new(Booking::Status)
                            .custom(BookingStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Booking::TripType)
                            .custom(TripType::Enum)
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone(Booking::BookingDate).not_null())
                    .col(timestamp_with_time_zone_null(Booking::CancellationDate))
                    .col(string_len_null(Booking::CancellationReason, 500))
                    .col(decimal_len_null(Booking::RefundAmount, 12, 2))
                    .col(boolean(Booking::IsActive).not_null().default(true))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_flight")
                            .from(Booking::Table, Booking::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(BookingStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(TripType::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    PnrNumber,
    UserId,
    FlightId,
    NumberOfPassengers,
    TotalPrice,
    Status,
    TripType,
    BookingDate,
    CancellationDate,
    CancellationReason,
    RefundAmount,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum BookingStatus {
    #[sea_orm(iden = "booking_status")]
    Enum,
    #[sea_orm(iden = "CONFIRMED")]
    Confirmed,
    #[sea_orm(iden = "CANCELLED")]
    Cancelled,
}

#[derive(DeriveIden)]
pub enum TripType {
    #[sea_orm(iden = "trip_type")]
    Enum,
    #[sea_orm(iden = "ONE_WAY")]
    OneWay,
    #[sea_orm(iden = "ROUND_TRIP")]
    RoundTrip,
}
