/// Recent activity feed entries shown on the dashboard
use super::ActivityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Kind of account event
    ActivityKind {
        Login => "login",
        Payment => "payment",
        Signup => "signup",
        Upgrade => "upgrade",
        Support => "support",
    }
}

/// One entry in the activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,

    #[serde(rename = "type")]
    pub kind: ActivityKind,

    pub description: String,
    pub timestamp: DateTime<Utc>,

    /// Display name of the user involved, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}
