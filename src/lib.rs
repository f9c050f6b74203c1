//! # Worker Administration Service
//!
//! HTTP service for managing worker accounts: create workers, edit any
//! user's profile fields, delete workers (admins are protected) and list
//! workers page by page with sensitive columns redacted.
//!
//! ## Architecture
//!
//! - **domain**: the `User` aggregate, DTOs and the repository trait
//! - **application**: `WorkerService`, the four admin use-cases
//! - **infrastructure**: SeaORM persistence, migrations, seeding, in-memory repository
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: errors, pagination, graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
