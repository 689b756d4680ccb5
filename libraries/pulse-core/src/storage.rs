//! Storage traits for the reporting contract
//!
//! The reporting API is defined once against these traits; the concrete
//! backend (static sample catalog or SQLite) is injected at startup.

use crate::error::Result;
use crate::types::{
    Activity, AnalyticsPoint, AuthUser, BillingPlan, Customer, CustomerId, DashboardSummary, Kpi,
    Report, StoredCredentials, TeamMember, Transaction, UserId,
};
use async_trait::async_trait;

/// Read-only access to every reporting resource
///
/// List operations return records most recently created first. Records
/// sharing a creation instant are returned later-inserted first. No
/// operation mutates the store, so two consecutive calls without an
/// intervening write return identical sequences.
#[async_trait]
pub trait ReportingStore: Send + Sync {
    // ========================================================================
    // Store-backed entities
    // ========================================================================

    /// Get all customers
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Exact-match lookup by id
    async fn get_customer(&self, id: &CustomerId) -> Result<Option<Customer>>;

    /// Get all team members
    async fn list_team_members(&self) -> Result<Vec<TeamMember>>;

    /// Get all reports, newest `createdAt` first
    async fn list_reports(&self) -> Result<Vec<Report>>;

    // ========================================================================
    // Dashboard and analytics
    // ========================================================================

    /// KPI tiles for the dashboard header
    async fn list_kpis(&self) -> Result<Vec<Kpi>>;

    /// Recent activity feed
    async fn list_activities(&self) -> Result<Vec<Activity>>;

    /// Full analytics time series, ascending by date
    async fn analytics_series(&self) -> Result<Vec<AnalyticsPoint>>;

    /// Combine KPIs, activities, and the analytics series into one payload
    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        Ok(DashboardSummary {
            kpis: self.list_kpis().await?,
            activities: self.list_activities().await?,
            analytics_data: self.analytics_series().await?,
        })
    }

    // ========================================================================
    // Billing
    // ========================================================================

    /// Static plan catalog
    async fn list_billing_plans(&self) -> Result<Vec<BillingPlan>>;

    /// Ledger entries
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;
}

/// Lookup of dashboard users for signed-token authentication
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a user and their password hash by login email
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<StoredCredentials>>;

    /// Get a user by id
    async fn get_user(&self, id: &UserId) -> Result<Option<AuthUser>>;
}

/// Everything the server needs from a backend
pub trait Backend: ReportingStore + CredentialStore {}

impl<T: ReportingStore + CredentialStore> Backend for T {}
