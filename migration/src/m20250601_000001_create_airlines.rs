use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airline::Table)
                    .if_not_exists()
                    .col(pk_auto(Airline::Id))
                    .col(string_len(Airline::Name, 100).not_null().unique_key())
                    .col(string_len(Airline::Code, 10).not_null().unique_key())
                    .col(string_len_null(Airline::ContactNumber, 15))
                    .col(string_len_null(Airline::Email, 100))
                    .col(boolean(Airline::IsActive).not_null().default(true))
                    .col(
                        timestamp_with_time_zone(Airline::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Airline::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airline {
    Table,
    Id,
    Name,
    Code,
    ContactNumber,
    Email,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
