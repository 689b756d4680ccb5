//! Pulse Core
//!
//! Domain types, traits, and error handling shared by the Pulse reporting
//! API, its storage backends, and the dashboard client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Customer`, `TeamMember`, `Report`, `AnalyticsPoint`, etc.
//! - **Storage Traits**: `ReportingStore` and `CredentialStore`, implemented by
//!   the in-memory sample catalog and the SQLite backend
//! - **Error Handling**: Unified `PulseError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use pulse_core::types::{Customer, CustomerId, CustomerStatus, Plan};
//! use chrono::NaiveDate;
//!
//! let customer = Customer {
//!     id: CustomerId::new("1"),
//!     name: "Alice Johnson".to_string(),
//!     email: "alice@techcorp.com".to_string(),
//!     company: "TechCorp Inc".to_string(),
//!     status: CustomerStatus::Active,
//!     plan: Plan::Enterprise,
//!     mrr: 999.0,
//!     joined_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     last_active: NaiveDate::from_ymd_opt(2025, 10, 9).unwrap(),
//! };
//! assert!(customer.validate().is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{PulseError, Result};
pub use storage::{Backend, CredentialStore, ReportingStore};

pub use types::{
    Activity, ActivityId, ActivityKind, AnalyticsPoint, AnalyticsResponse, AuthUser,
    BillingInterval, BillingPlan, Customer, CustomerId, CustomerStatus, DashboardSummary, Kpi,
    MemberStatus, Plan, PlanId, Report, ReportId, ReportStatus, ReportType, StoredCredentials,
    TeamMember, TeamMemberId, TeamRole, Transaction, TransactionId, TransactionStatus, Trend,
    UserId,
};
