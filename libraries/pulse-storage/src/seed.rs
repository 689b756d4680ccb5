//! Load the sample catalog into a SQLite database

use crate::error::Result;
use crate::{customers, reports, sample, team_members};
use sqlx::SqlitePool;

/// Counts of rows written by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub team_members: usize,
    pub reports: usize,
}

impl SeedSummary {
    /// True when the run wrote nothing
    pub fn is_empty(&self) -> bool {
        self.customers == 0 && self.team_members == 0 && self.reports == 0
    }
}

/// Seed customers, team members, and reports from the sample catalog
///
/// Skips the run when customers already exist, unless `reset` is set, in
/// which case those three tables are cleared first. Users are never touched.
/// Runs in a single transaction: either everything is written or nothing is.
pub async fn seed(pool: &SqlitePool, reset: bool) -> Result<SeedSummary> {
    if !reset && customers::count(pool).await? > 0 {
        tracing::info!("Store already populated, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut tx = pool.begin().await?;

    if reset {
        tracing::info!("Clearing existing reporting data");
        sqlx::query("DELETE FROM reports").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM team_members")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM customers").execute(&mut *tx).await?;
    }

    let catalog_customers = sample::customers();
    for customer in &catalog_customers {
        customers::insert(&mut *tx, customer).await?;
    }

    let catalog_members = sample::team_members();
    for member in &catalog_members {
        team_members::insert(&mut *tx, member).await?;
    }

    let catalog_reports = sample::reports();
    for report in &catalog_reports {
        reports::insert(&mut *tx, report).await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        customers: catalog_customers.len(),
        team_members: catalog_members.len(),
        reports: catalog_reports.len(),
    };
    tracing::info!(
        customers = summary.customers,
        team_members = summary.team_members,
        reports = summary.reports,
        "Seeded reporting data"
    );

    Ok(summary)
}
