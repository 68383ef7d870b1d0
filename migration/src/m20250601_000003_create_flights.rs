use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250601_000001_create_airlines::Airline;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(FlightStatus::Enum)
                    .values([FlightStatus::Active, FlightStatus::Cancelled])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(integer(Flight::AirlineId).not_null())
                    .col(string_len(Flight::FlightNumber, 20).not_null().unique_key())
                    .col(string_len(Flight::DepartureCity, 50).not_null())
                    .col(string_len(Flight::ArrivalCity, 50).not_null())
                    .col(timestamp_with_time_zone(Flight::DepartureTime).not_null())
                    .col(timestamp_with_time_zone(Flight::ArrivalTime).not_null())
                    .col(integer(Flight::TotalSeats).not_null())
                    .col(integer(Flight::AvailableSeats).not_null())
                    .col(decimal_len(Flight::PricePerSeat, 10, 2).not_null())
                    .col(string_len_null(Flight::AircraftType, 50))
                    .col(
                        ColumnDef::new(Flight::Status)
                            .custom(FlightStatus::Enum)
                            .not_null(),
                    )
                    .col(boolean(Flight::IsActive).not_null().default(true))
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
                            .name("fk_flight_airline")
                            .from(Flight::Table, Flight::AirlineId)
                            .to(Airline::Table, Airline::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Route search hits these two columns
        manager
            .create_index(
                Index::create()
                    .name("idx_flight_departure_city")
                    .table(Flight::Table)
                    .col(Flight::DepartureCity)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_arrival_city")
                    .table(Flight::Table)
                    .col(Flight::ArrivalCity)
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
    AirlineId,
    FlightNumber,
    DepartureCity,
    ArrivalCity,
    DepartureTime,
    ArrivalTime,
    TotalSeats,
    AvailableSeats,
    PricePerSeat,
    AircraftType,
    Status,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum FlightStatus {
    #[sea_orm(iden = "flight_status")]
    Enum,
    #[sea_orm(iden = "ACTIVE")]
    Active,
    #[sea_orm(iden = "CANCELLED")]
    Cancelled,
}
