use crate::{customers, reports, sample, seed, team_members, users};
use async_trait::async_trait;
use pulse_core::{
    error::Result,
    storage::{CredentialStore, ReportingStore},
    types::*,
};
use sqlx::SqlitePool;

/// SQLite-backed store
///
/// Customers, team members, reports, and users live in the database.
/// KPIs, activities, analytics, plans, and transactions are served from
/// the static catalog.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Load the sample catalog; see [`seed::seed`]
    pub async fn seed(&self, reset: bool) -> std::result::Result<seed::SeedSummary, crate::StorageError> {
        seed::seed(&self.pool, reset).await
    }
}

#[async_trait]
impl ReportingStore for SqliteStore {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(customers::get_all(&self.pool).await?)
    }

    async fn get_customer(&self, id: &CustomerId) -> Result<Option<Customer>> {
        Ok(customers::get_by_id(&self.pool, id).await?)
    }

    async fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        Ok(team_members::get_all(&self.pool).await?)
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        Ok(reports::get_all(&self.pool).await?)
    }

    async fn list_kpis(&self) -> Result<Vec<Kpi>> {
        Ok(sample::kpis())
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        Ok(sample::activities())
    }

    async fn analytics_series(&self) -> Result<Vec<AnalyticsPoint>> {
        Ok(sample::analytics())
    }

    async fn list_billing_plans(&self) -> Result<Vec<BillingPlan>> {
        Ok(sample::billing_plans())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(sample::transactions())
    }
}

#[async_trait]
impl CredentialStore for SqliteStore {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<StoredCredentials>> {
        Ok(users::find_credentials_by_email(&self.pool, email).await?)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<AuthUser>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }
}
