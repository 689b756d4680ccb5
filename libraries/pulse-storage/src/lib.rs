//! Pulse Storage
//!
//! Storage backends for the Pulse reporting API.
//!
//! # Architecture
//!
//! - **Injected Backend**: the API is written against `pulse_core::ReportingStore`;
//!   this crate provides two interchangeable implementations
//! - **Sample Catalog**: `SampleStore` serves the fixed in-memory sample set
//! - **SQLite**: `SqliteStore` persists customers, team members, reports, and
//!   users; dashboard, analytics, and billing data come from the static catalog
//! - **Vertical Slicing**: each persisted entity owns its own queries
//!
//! # Example
//!
//! ```rust,no_run
//! use pulse_storage::{create_pool, run_migrations, SqliteStore};
//! use pulse_core::ReportingStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://pulse.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteStore::new(pool);
//! store.seed(false).await?;
//!
//! let customers = store.list_customers().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod sample;
pub mod seed;

// Vertical slices
pub mod customers;
pub mod reports;
pub mod team_members;
pub mod users;

pub use context::SqliteStore;
pub use error::StorageError;
pub use sample::SampleStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://pulse.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
