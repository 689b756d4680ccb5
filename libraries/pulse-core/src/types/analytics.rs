/// Analytics series, KPI tiles, and the aggregate dashboard payload
use super::Activity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sample of the business time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPoint {
    pub date: NaiveDate,
    pub revenue: f64,
    pub users: u32,
    pub conversions: u32,

    /// Churn as a percentage, e.g. 2.5 for 2.5%
    pub churn: f64,
}

wire_enum! {
    /// Direction a KPI moved
    Trend {
        Up => "up",
        Down => "down",
    }
}

/// Display-only KPI tile; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,

    /// Pre-formatted display value, e.g. "$71,000"
    pub value: String,

    /// Signed percent change
    pub change: f64,

    pub trend: Trend,
}

/// `GET /api/dashboard` payload
///
/// The three sequences are sourced independently and are not
/// cross-checked against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub kpis: Vec<Kpi>,
    pub activities: Vec<Activity>,
    pub analytics_data: Vec<AnalyticsPoint>,
}

/// `GET /api/analytics` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub analytics_data: Vec<AnalyticsPoint>,
}
