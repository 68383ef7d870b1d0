pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_airlines;
mod m20250601_000002_create_users;
mod m20250601_000003_create_flights;
mod m20250601_000004_create_bookings;
mod m20250601_000005_create_passengers;
mod m20250601_000006_create_seats;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_airlines::Migration),
            Box::new(m20250601_000002_create_users::Migration),
            Box::new(m20250601_000003_create_flights::Migration),
            Box::new(m20250601_000004_create_bookings::Migration),
            Box::new(m20250601_000005_create_passengers::Migration),
            Box::new(m20250601_000006_create_seats::Migration),
        ]
    }
}
