use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000003_create_flights::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::Id))
                    .col(integer(Seat::FlightId).not_null())
                    .col(string_len(Seat::SeatNumber, 10).not_null())
                    .col(boolean(Seat::IsAvailable).not_null().default(true))
                    .col(boolean(Seat::IsReserved).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_flight")
                            .from(Seat::Table, Seat::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_seat_flight_seat_number")
                    .table(Seat::Table)
                    .col(Seat::FlightId)
                    .col(Seat::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Seat {
    Table,
    Id,
    FlightId,
    SeatNumber,
    IsAvailable,
    IsReserved,
}
