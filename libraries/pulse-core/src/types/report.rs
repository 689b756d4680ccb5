/// Report domain types
use super::ReportId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// What a report measures
    ReportType {
        Revenue => "revenue",
        Users => "users",
        Engagement => "engagement",
        Performance => "performance",
    }
}

wire_enum! {
    /// Outcome of the last run
    ReportStatus {
        Completed => "completed",
        Running => "running",
        Failed => "failed",
    }
}

/// A saved report definition and its last run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub name: String,

    #[serde(rename = "type")]
    pub report_type: ReportType,

    pub created_at: NaiveDate,
    pub last_run: NaiveDate,
    pub status: ReportStatus,

    /// Human-readable output size, e.g. "2.4 MB"
    pub size: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_uses_type_key() {
        let report = Report {
            id: ReportId::new("4"),
            name: "Performance Dashboard".to_string(),
            report_type: ReportType::Performance,
            created_at: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
            last_run: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            status: ReportStatus::Failed,
            size: "0 MB".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "performance");
        assert_eq!(json["createdAt"], "2025-08-10");
        assert_eq!(json["lastRun"], "2025-10-05");
        assert_eq!(json["status"], "failed");

        let back: Report = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
