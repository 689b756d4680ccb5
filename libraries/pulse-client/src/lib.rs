//! Pulse Client
//!
//! Typed HTTP client for the Pulse reporting API.
//!
//! # Features
//!
//! - **Reporting reads**: customers, team, reports, dashboard, analytics, billing
//! - **Authentication**: demo or signed-token login, `me`, logout
//! - **Local filtering**: search and status narrowing of the customer list
//! - **Summary tiles**: header counts derived from fetched sequences
//!
//! # Example
//!
//! ```no_run
//! use pulse_client::{ClientConfig, CustomerFilter, CustomerStats, PulseClient};
//! use pulse_core::CustomerStatus;
//!
//! # async fn example() -> pulse_client::Result<()> {
//! let client = PulseClient::new(ClientConfig::new("http://localhost:3001"))?;
//!
//! let customers = client.list_customers().await?;
//! let trials = CustomerFilter::new("").with_status(CustomerStatus::Trial).apply(&customers);
//! let stats = CustomerStats::from_customers(&customers);
//! println!("{} trials, ${} MRR", trials.len(), stats.total_mrr);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod filter;
mod summary;
mod types;

pub use client::PulseClient;
pub use error::{ClientError, Result};
pub use filter::CustomerFilter;
pub use summary::{AnalyticsTotals, CustomerStats, ReportStats, TeamStats};
pub use types::{ClientConfig, HealthResponse, LoginResponse, LogoutResponse, MeResponse};
