use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000004_create_bookings::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(pk_auto(Passenger::Id))
                    .col(integer(Passenger::BookingId).not_null())
                    .col(string_len(Passenger::Name, 100).not_null())
                    .col(string_len_null(Passenger::Gender, 10))
                    .col(integer_null(Passenger::Age))
                    .col(string_len_null(Passenger::MealPreference, 30))
                    .col(
                        integer(Passenger::BaggageAllowanceKg)
                            .not_null()
                            .default(20),
                    )
                    .col(boolean(Passenger::IsActive).not_null().default(true))
                    .col(
                        timestamp_with_time_zone(Passenger::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_booking")
                            .from(Passenger::Table, Passenger::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Passenger {
    Table,
    Id,
    BookingId,
    Name,
    Gender,
    Age,
    MealPreference,
    BaggageAllowanceKg,
    IsActive,
    CreatedAt,
}
