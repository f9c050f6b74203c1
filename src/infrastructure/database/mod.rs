pub mod entities;
pub mod migrator;
pub mod repositories;
pub mod seed;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use repositories::SeaOrmUserRepository;
pub use seed::ensure_super_admin;

/// Lifetime given to the single in-memory connection. Recycling it would
/// drop the database.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./workers.db?mode=rwc")
    pub url: String,
    /// Pool size; `None` keeps the driver default.
    pub max_connections: Option<u32>,
    /// Log every SQL statement at debug level
    pub sqlx_logging: bool,
    /// Close connections idle for longer than this; `None` keeps the driver default.
    pub idle_timeout: Option<Duration>,
    /// Recycle connections older than this; `None` keeps the driver default.
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./workers.db?mode=rwc".to_string(),
            max_connections: None,
            sqlx_logging: false,
            idle_timeout: None,
            max_lifetime: None,
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory SQLite database, pinned to one long-lived connection
    /// so every query sees the same data.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            sqlx_logging: false,
            idle_timeout: Some(PINNED_CONNECTION_LIFETIME),
            max_lifetime: Some(PINNED_CONNECTION_LIFETIME),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(config.sqlx_logging);
    if let Some(max) = config.max_connections {
        options.max_connections(max).min_connections(1);
    }
    if let Some(timeout) = config.idle_timeout {
        options.idle_timeout(timeout);
    }
    if let Some(lifetime) = config.max_lifetime {
        options.max_lifetime(lifetime);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}
