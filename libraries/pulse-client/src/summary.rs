//! Summary tiles computed on the client from fetched sequences.
//!
//! The service performs no aggregation; these are display helpers only.

use pulse_core::types::{
    AnalyticsPoint, Customer, CustomerStatus, MemberStatus, Report, ReportStatus, TeamMember,
};

/// Customer page header counts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub trial: usize,
    pub total_mrr: f64,
}

impl CustomerStats {
    pub fn from_customers(customers: &[Customer]) -> Self {
        customers.iter().fold(
            Self {
                total: customers.len(),
                ..Self::default()
            },
            |mut stats, c| {
                match c.status {
                    CustomerStatus::Active => stats.active += 1,
                    CustomerStatus::Trial => stats.trial += 1,
                    CustomerStatus::Inactive => {}
                }
                stats.total_mrr += c.mrr;
                stats
            },
        )
    }
}

/// Team page header counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamStats {
    pub total: usize,
    pub active: usize,
    pub invited: usize,

    /// Owners count as admins
    pub admins: usize,
}

impl TeamStats {
    pub fn from_members(members: &[TeamMember]) -> Self {
        Self {
            total: members.len(),
            active: members
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
            invited: members
                .iter()
                .filter(|m| m.status == MemberStatus::Invited)
                .count(),
            admins: members.iter().filter(|m| m.role.is_admin()).count(),
        }
    }
}

/// Reports page header counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub completed: usize,
    pub running: usize,
}

impl ReportStats {
    pub fn from_reports(reports: &[Report]) -> Self {
        let count = |status| reports.iter().filter(|r| r.status == status).count();
        Self {
            total: reports.len(),
            completed: count(ReportStatus::Completed),
            running: count(ReportStatus::Running),
        }
    }
}

/// Analytics page totals over the whole series
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticsTotals {
    pub total_revenue: f64,

    /// Users at the last point of the series
    pub latest_users: u32,

    pub total_conversions: u64,

    /// Mean churn percentage; 0 for an empty series
    pub average_churn: f64,
}

impl AnalyticsTotals {
    pub fn from_series(series: &[AnalyticsPoint]) -> Self {
        if series.is_empty() {
            return Self::default();
        }

        let total_churn: f64 = series.iter().map(|p| p.churn).sum();
        Self {
            total_revenue: series.iter().map(|p| p.revenue).sum(),
            latest_users: series.last().map_or(0, |p| p.users),
            total_conversions: series.iter().map(|p| u64::from(p.conversions)).sum(),
            average_churn: total_churn / series.len() as f64,
        }
    }
}
