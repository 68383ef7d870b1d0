use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    tracing::debug!("Connecting to database");
    Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::Internal(format!("Database connection failed: {}", e)))
}
