//! Worker administration HTTP server.
//!
//! Reads configuration from a TOML file (~/.config/worker-admin/config.toml,
//! overridable with WORKER_ADMIN_CONFIG).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use worker_admin::config::{AppConfig, LoggingConfig};
use worker_admin::domain::UserRepositoryInterface;
use worker_admin::infrastructure::database::migrator::Migrator;
use worker_admin::infrastructure::database::{ensure_super_admin, SeaOrmUserRepository};
use worker_admin::shared::ShutdownCoordinator;
use worker_admin::{create_api_router, default_config_path, init_database};

fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    if cfg.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("WORKER_ADMIN_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_logging(&cfg.logging);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_logging(&cfg.logging);
            warn!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting worker administration service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()?;

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let repo: Arc<dyn UserRepositoryInterface> = Arc::new(
        SeaOrmUserRepository::new(db.clone()).with_bcrypt_cost(app_cfg.security.bcrypt_cost),
    );

    ensure_super_admin(repo.as_ref(), &app_cfg.super_admin_seed()).await?;

    // ── Shutdown handling ──────────────────────────────────────
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    // ── REST API ───────────────────────────────────────────────
    let api_router = create_api_router(
        repo,
        db.clone(),
        app_cfg.pagination,
        Some(prometheus_handle),
    );

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("REST API server received shutdown signal");
        })
        .await?;

    // ── Cleanup ────────────────────────────────────────────────
    shutdown
        .cleanup(|| async move {
            match db.close().await {
                Ok(()) => info!("Database connection closed"),
                Err(e) => warn!("Error closing database connection: {}", e),
            }
        })
        .await;

    info!("Worker administration service shutdown complete");
    Ok(())
}
