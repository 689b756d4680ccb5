/// Team member domain types
use super::TeamMemberId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Workspace role, highest privilege first
    TeamRole {
        Owner => "owner",
        Admin => "admin",
        Member => "member",
        Viewer => "viewer",
    }
}

impl TeamRole {
    /// Owners and admins manage the workspace
    pub fn is_admin(&self) -> bool {
        matches!(self, TeamRole::Owner | TeamRole::Admin)
    }
}

wire_enum! {
    /// Membership state
    MemberStatus {
        Active => "active",
        Invited => "invited",
        Inactive => "inactive",
    }
}

/// A member of the operator's own team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub status: MemberStatus,
    pub joined_date: NaiveDate,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
