pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// Open a connection to the store named by `url`.
///
/// The URL comes from [`crate::config::DatabaseSettings`], which already
/// resolved the `DATABASE_URL` override.
pub async fn init_database(url: &str) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", url);
    let db = Database::connect(url).await?;
    info!("Database connected successfully");
    Ok(db)
}
