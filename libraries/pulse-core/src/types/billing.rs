/// Billing catalog and ledger types
use super::{PlanId, TransactionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Billing cadence
    BillingInterval {
        Month => "month",
        Year => "year",
    }
}

wire_enum! {
    /// Settlement state of a ledger entry
    TransactionStatus {
        Completed => "completed",
        Pending => "pending",
        Failed => "failed",
    }
}

/// A plan in the static pricing catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingPlan {
    pub id: PlanId,
    pub name: String,
    pub price: f64,
    pub interval: BillingInterval,

    /// Feature bullets, in display order
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}

/// Append-only ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub status: TransactionStatus,
}
