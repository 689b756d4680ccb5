/// Enumerated string fields share one wire form: lowercase names that must
/// match exactly when parsed.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Convert to string representation
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::PulseError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err($crate::error::PulseError::invalid_input(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod activity;
mod analytics;
mod billing;
mod customer;
mod ids;
mod report;
mod team;
mod user;

pub use activity::{Activity, ActivityKind};
pub use analytics::{AnalyticsPoint, AnalyticsResponse, DashboardSummary, Kpi, Trend};
pub use billing::{BillingInterval, BillingPlan, Transaction, TransactionStatus};
pub use customer::{Customer, CustomerStatus, Plan};
pub use ids::{ActivityId, CustomerId, PlanId, ReportId, TeamMemberId, TransactionId, UserId};
pub use report::{Report, ReportStatus, ReportType};
pub use team::{MemberStatus, TeamMember, TeamRole};
pub use user::{AuthUser, StoredCredentials};
