//! Create-db command - Database bootstrap.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::ensure_database_exists;

/// Execute the create-db command
pub async fn execute(config: Config) -> AppResult<()> {
    let target = config
        .bootstrap_target()
        .map_err(|e| AppError::internal(format!("Invalid DATABASE_URL: {}", e)))?;
    tracing::info!(database = %target.name, "Checking database...");

    let created = ensure_database_exists(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database bootstrap failed: {}", e)))?;

    if created {
        println!("Database {} created.", target.name);
    } else {
        println!("Database {} already exists.", target.name);
    }

    Ok(())
}
