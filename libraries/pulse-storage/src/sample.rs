//! Fixed sample catalog and the in-memory backend that serves it
//!
//! The catalog lists records in creation order (oldest first). Reads
//! return them newest first, matching what `SqliteStore` returns after
//! seeding from the same catalog.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use pulse_core::{
    error::Result,
    storage::{CredentialStore, ReportingStore},
    types::*,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("catalog dates are valid")
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, minute, 0)
        .expect("catalog times are valid")
        .and_utc()
}

fn customer(
    id: &str,
    name: &str,
    email: &str,
    company: &str,
    status: CustomerStatus,
    plan: Plan,
    mrr: f64,
    joined_date: NaiveDate,
    last_active: NaiveDate,
) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
        status,
        plan,
        mrr,
        joined_date,
        last_active,
    }
}

/// Sample customers, oldest first
pub fn customers() -> Vec<Customer> {
    use CustomerStatus::{Active, Inactive, Trial};
    use Plan::{Enterprise, Free, Pro, Starter};

    vec![
        customer("1", "Alice Johnson", "alice@techcorp.com", "TechCorp Inc", Active, Enterprise, 999.0, day(2024, 1, 15), day(2025, 10, 9)),
        customer("2", "Bob Smith", "bob@startupxyz.com", "StartupXYZ", Active, Pro, 299.0, day(2024, 3, 22), day(2025, 10, 8)),
        customer("3", "Carol Williams", "carol@designstudio.com", "Design Studio", Trial, Pro, 0.0, day(2025, 9, 28), day(2025, 10, 10)),
        customer("4", "David Brown", "david@ecommerce.com", "E-Commerce Co", Active, Starter, 99.0, day(2024, 6, 10), day(2025, 10, 7)),
        customer("5", "Emma Davis", "emma@consultancy.com", "Consultancy Group", Inactive, Free, 0.0, day(2024, 2, 1), day(2025, 8, 15)),
        customer("6", "Frank Miller", "frank@agency.com", "Digital Agency", Active, Pro, 299.0, day(2024, 7, 18), day(2025, 10, 9)),
        customer("7", "Grace Lee", "grace@saascompany.com", "SaaS Company", Active, Enterprise, 999.0, day(2023, 11, 5), day(2025, 10, 10)),
        customer("8", "Henry Taylor", "henry@fintech.com", "FinTech Solutions", Trial, Starter, 0.0, day(2025, 10, 1), day(2025, 10, 10)),
    ]
}

/// Sample team members, oldest first
pub fn team_members() -> Vec<TeamMember> {
    let member = |id: &str, name: &str, role: TeamRole, status: MemberStatus, joined: NaiveDate| {
        let first = name.split_whitespace().next().unwrap_or(name);
        TeamMember {
            id: TeamMemberId::new(id),
            name: name.to_string(),
            email: format!("{}@company.com", first.to_lowercase()),
            role,
            status,
            joined_date: joined,
            avatar: Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={first}"
            )),
        }
    };

    vec![
        member("1", "John Doe", TeamRole::Owner, MemberStatus::Active, day(2023, 1, 1)),
        member("2", "Sarah Connor", TeamRole::Admin, MemberStatus::Active, day(2023, 3, 15)),
        member("3", "Michael Scott", TeamRole::Member, MemberStatus::Active, day(2023, 6, 20)),
        member("4", "Pam Beesly", TeamRole::Member, MemberStatus::Active, day(2023, 8, 10)),
        member("5", "Jim Halpert", TeamRole::Viewer, MemberStatus::Invited, day(2024, 1, 5)),
    ]
}

/// Sample reports, in catalog order
pub fn reports() -> Vec<Report> {
    let report = |id: &str,
                  name: &str,
                  report_type: ReportType,
                  created_at: NaiveDate,
                  last_run: NaiveDate,
                  status: ReportStatus,
                  size: &str| Report {
        id: ReportId::new(id),
        name: name.to_string(),
        report_type,
        created_at,
        last_run,
        status,
        size: size.to_string(),
    };

    vec![
        report("1", "Monthly Revenue Report", ReportType::Revenue, day(2025, 10, 1), day(2025, 10, 9), ReportStatus::Completed, "2.4 MB"),
        report("2", "User Growth Analysis", ReportType::Users, day(2025, 9, 15), day(2025, 10, 10), ReportStatus::Running, "1.8 MB"),
        report("3", "Engagement Metrics", ReportType::Engagement, day(2025, 9, 20), day(2025, 10, 8), ReportStatus::Completed, "3.1 MB"),
        report("4", "Performance Dashboard", ReportType::Performance, day(2025, 8, 10), day(2025, 10, 5), ReportStatus::Failed, "0 MB"),
        report("5", "Quarterly Business Review", ReportType::Revenue, day(2025, 7, 1), day(2025, 10, 1), ReportStatus::Completed, "5.2 MB"),
    ]
}

/// Recent activity feed, newest first
pub fn activities() -> Vec<Activity> {
    let activity = |id: &str, kind: ActivityKind, description: &str, timestamp, user: &str| Activity {
        id: ActivityId::new(id),
        kind,
        description: description.to_string(),
        timestamp,
        user: Some(user.to_string()),
    };

    vec![
        activity("1", ActivityKind::Signup, "New user signed up", at(day(2025, 10, 10), 10, 30), "Grace Lee"),
        activity("2", ActivityKind::Payment, "Payment received from TechCorp Inc", at(day(2025, 10, 10), 9, 15), "Alice Johnson"),
        activity("3", ActivityKind::Upgrade, "User upgraded to Pro plan", at(day(2025, 10, 9), 16, 45), "Bob Smith"),
        activity("4", ActivityKind::Support, "Support ticket opened", at(day(2025, 10, 9), 14, 20), "Carol Williams"),
        activity("5", ActivityKind::Login, "User logged in", at(day(2025, 10, 9), 11, 0), "David Brown"),
    ]
}

/// Analytics time series, ascending by date
pub fn analytics() -> Vec<AnalyticsPoint> {
    let point = |date, revenue, users, conversions, churn| AnalyticsPoint {
        date,
        revenue,
        users,
        conversions,
        churn,
    };

    vec![
        point(day(2025, 9, 1), 45000.0, 1250, 42, 3.2),
        point(day(2025, 9, 5), 48000.0, 1280, 45, 3.0),
        point(day(2025, 9, 10), 52000.0, 1320, 48, 2.8),
        point(day(2025, 9, 15), 55000.0, 1380, 52, 2.5),
        point(day(2025, 9, 20), 58000.0, 1420, 55, 2.4),
        point(day(2025, 9, 25), 61000.0, 1480, 58, 2.2),
        point(day(2025, 9, 30), 64000.0, 1520, 62, 2.1),
        point(day(2025, 10, 5), 67000.0, 1580, 65, 2.0),
        point(day(2025, 10, 10), 71000.0, 1650, 70, 1.9),
    ]
}

/// Dashboard KPI tiles
pub fn kpis() -> Vec<Kpi> {
    let kpi = |title: &str, value: &str, change, trend| Kpi {
        title: title.to_string(),
        value: value.to_string(),
        change,
        trend,
    };

    vec![
        kpi("Total Revenue", "$71,000", 12.5, Trend::Up),
        kpi("Active Users", "1,650", 8.6, Trend::Up),
        kpi("Conversion Rate", "4.24%", 2.1, Trend::Up),
        kpi("Churn Rate", "1.9%", -0.3, Trend::Down),
    ]
}

/// Pricing catalog
pub fn billing_plans() -> Vec<BillingPlan> {
    let plan = |id: &str, name: &str, price, features: &[&str], popular| BillingPlan {
        id: PlanId::new(id),
        name: name.to_string(),
        price,
        interval: BillingInterval::Month,
        features: features.iter().map(|f| (*f).to_string()).collect(),
        popular,
    };

    vec![
        plan(
            "1",
            "Free",
            0.0,
            &["Up to 10 users", "Basic analytics", "Email support", "1GB storage"],
            None,
        ),
        plan(
            "2",
            "Starter",
            99.0,
            &[
                "Up to 50 users",
                "Advanced analytics",
                "Priority email support",
                "10GB storage",
                "API access",
            ],
            None,
        ),
        plan(
            "3",
            "Pro",
            299.0,
            &[
                "Up to 200 users",
                "Advanced analytics",
                "24/7 chat support",
                "100GB storage",
                "API access",
                "Custom integrations",
                "Advanced security",
            ],
            Some(true),
        ),
        plan(
            "4",
            "Enterprise",
            999.0,
            &[
                "Unlimited users",
                "Custom analytics",
                "Dedicated support",
                "Unlimited storage",
                "API access",
                "Custom integrations",
                "Advanced security",
                "SLA guarantee",
                "Custom training",
            ],
            None,
        ),
    ]
}

/// Billing ledger, in recorded order
pub fn transactions() -> Vec<Transaction> {
    let tx = |id: &str, date, description: &str, amount, status| Transaction {
        id: TransactionId::new(id),
        date,
        description: description.to_string(),
        amount,
        status,
    };

    vec![
        tx("1", day(2025, 10, 1), "Enterprise Plan - TechCorp Inc", 999.0, TransactionStatus::Completed),
        tx("2", day(2025, 10, 1), "Pro Plan - Digital Agency", 299.0, TransactionStatus::Completed),
        tx("3", day(2025, 9, 15), "Pro Plan - StartupXYZ", 299.0, TransactionStatus::Completed),
        tx("4", day(2025, 9, 10), "Starter Plan - E-Commerce Co", 99.0, TransactionStatus::Completed),
        tx("5", day(2025, 9, 5), "Enterprise Plan - SaaS Company", 999.0, TransactionStatus::Completed),
        tx("6", day(2025, 10, 10), "Pro Plan - Design Studio", 299.0, TransactionStatus::Pending),
    ]
}

/// In-memory backend over a fixed record set
///
/// Immutable after construction, so concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct SampleStore {
    customers: Vec<Customer>,
    team_members: Vec<TeamMember>,
    reports: Vec<Report>,
    users: Vec<StoredCredentials>,
}

impl SampleStore {
    /// Store holding the full sample catalog
    pub fn new() -> Self {
        Self {
            customers: customers(),
            team_members: team_members(),
            reports: reports(),
            users: Vec::new(),
        }
    }

    /// Store with no customers, team members, reports, or users
    ///
    /// Dashboard, analytics, and billing reads still serve the catalog.
    pub fn empty() -> Self {
        Self {
            customers: Vec::new(),
            team_members: Vec::new(),
            reports: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Replace the customer set (given oldest first)
    #[must_use]
    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    /// Replace the team member set (given oldest first)
    #[must_use]
    pub fn with_team_members(mut self, team_members: Vec<TeamMember>) -> Self {
        self.team_members = team_members;
        self
    }

    /// Replace the report set
    #[must_use]
    pub fn with_reports(mut self, reports: Vec<Report>) -> Self {
        self.reports = reports;
        self
    }

    /// Register a login for signed-token auth
    #[must_use]
    pub fn with_user(mut self, credentials: StoredCredentials) -> Self {
        self.users.push(credentials);
        self
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_first<T: Clone>(records: &[T]) -> Vec<T> {
    records.iter().rev().cloned().collect()
}

#[async_trait]
impl ReportingStore for SampleStore {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(newest_first(&self.customers))
    }

    async fn get_customer(&self, id: &CustomerId) -> Result<Option<Customer>> {
        Ok(self.customers.iter().find(|c| &c.id == id).cloned())
    }

    async fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        Ok(newest_first(&self.team_members))
    }

    async fn list_reports(&self) -> Result<Vec<Report>> {
        // Stable sort over the reversed catalog keeps later entries first on ties
        let mut reports = newest_first(&self.reports);
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    async fn list_kpis(&self) -> Result<Vec<Kpi>> {
        Ok(kpis())
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        Ok(activities())
    }

    async fn analytics_series(&self) -> Result<Vec<AnalyticsPoint>> {
        Ok(analytics())
    }

    async fn list_billing_plans(&self) -> Result<Vec<BillingPlan>> {
        Ok(billing_plans())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(transactions())
    }
}

#[async_trait]
impl CredentialStore for SampleStore {
    async fn find_credentials_by_email(&self, email: &str) -> Result<Option<StoredCredentials>> {
        Ok(self.users.iter().find(|c| c.user.email == email).cloned())
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<AuthUser>> {
        Ok(self
            .users
            .iter()
            .find(|c| &c.user.id == id)
            .map(|c| c.user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(customers().len(), 8);
        assert_eq!(team_members().len(), 5);
        assert_eq!(reports().len(), 5);
        assert_eq!(activities().len(), 5);
        assert_eq!(analytics().len(), 9);
        assert_eq!(kpis().len(), 4);
        assert_eq!(billing_plans().len(), 4);
        assert_eq!(transactions().len(), 6);
    }

    #[test]
    fn catalog_customers_are_valid_and_unique() {
        let all = customers();
        for c in &all {
            assert!(c.validate().is_ok(), "{} should be valid", c.id);
        }
        let mut ids: Vec<_> = all.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn analytics_is_ascending_by_date() {
        let series = analytics();
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn only_pro_plan_is_popular() {
        let popular: Vec<_> = billing_plans()
            .into_iter()
            .filter(|p| p.popular == Some(true))
            .map(|p| p.name)
            .collect();
        assert_eq!(popular, vec!["Pro".to_string()]);
    }

    #[test]
    fn team_emails_and_avatars_follow_first_name() {
        let jim = &team_members()[4];
        assert_eq!(jim.email, "jim@company.com");
        assert_eq!(
            jim.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Jim")
        );
    }

    #[tokio::test]
    async fn lists_are_newest_first() {
        let store = SampleStore::new();

        let customers = store.list_customers().await.unwrap();
        assert_eq!(customers.first().unwrap().id.as_str(), "8");
        assert_eq!(customers.last().unwrap().id.as_str(), "1");

        let reports = store.list_reports().await.unwrap();
        let ids: Vec<_> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4", "5"]);
    }

    #[tokio::test]
    async fn report_ties_keep_later_entry_first() {
        let mut reports = reports();
        reports[1].created_at = reports[0].created_at;
        let store = SampleStore::empty().with_reports(reports);

        let ids: Vec<_> = store
            .list_reports()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(&ids[..2], &["2".to_string(), "1".to_string()]);
    }

    #[tokio::test]
    async fn unknown_customer_is_none() {
        let store = SampleStore::new();
        assert!(store
            .get_customer(&CustomerId::new("999"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn dashboard_analytics_matches_series() {
        let store = SampleStore::new();
        let summary = store.dashboard_summary().await.unwrap();
        assert_eq!(summary.analytics_data, store.analytics_series().await.unwrap());
        assert_eq!(summary.kpis.len(), 4);
        assert_eq!(summary.activities.len(), 5);
    }
}
