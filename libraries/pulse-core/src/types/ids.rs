/// ID types for Pulse entities
///
/// Every id is an opaque string, unique within its own collection.
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[cfg_attr(feature = "sqlx-support", derive(sqlx::Type), sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(
    /// Customer identifier
    CustomerId
);
string_id!(
    /// Team member identifier
    TeamMemberId
);
string_id!(
    /// Report identifier
    ReportId
);
string_id!(
    /// Dashboard activity identifier
    ActivityId
);
string_id!(
    /// Billing plan identifier
    PlanId
);
string_id!(
    /// Billing transaction identifier
    TransactionId
);
string_id!(
    /// Dashboard user identifier (auth only)
    UserId
);
