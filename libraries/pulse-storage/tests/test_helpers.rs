//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and constraints.

#![allow(dead_code)]

use chrono::NaiveDate;
use pulse_core::types::*;
use pulse_storage::SqliteStore;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: SqliteStore,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = pulse_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        pulse_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            store: SqliteStore::new(pool),
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        self.store.pool()
    }
}

/// Test fixture: a customer with the given id and commercial state
pub fn test_customer(id: &str, status: CustomerStatus, plan: Plan, mrr: f64) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: format!("Customer {id}"),
        email: format!("customer{id}@example.com"),
        company: format!("Company {id}"),
        status,
        plan,
        mrr,
        joined_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        last_active: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
    }
}

/// Test fixture: a report created on the given date
pub fn test_report(id: &str, created_at: NaiveDate) -> Report {
    Report {
        id: ReportId::new(id),
        name: format!("Report {id}"),
        report_type: ReportType::Revenue,
        created_at,
        last_run: created_at,
        status: ReportStatus::Completed,
        size: "1.0 MB".to_string(),
    }
}
