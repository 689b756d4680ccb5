//! Local, non-authoritative narrowing of an already-fetched customer list.
//!
//! The service accepts no query parameters; search and status filtering
//! happen entirely on the client.

use pulse_core::types::{Customer, CustomerStatus};

/// Search box plus status dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// Case-insensitive substring matched against name, email, and company
    pub search: String,

    /// `None` means every status
    pub status: Option<CustomerStatus>,
}

impl CustomerFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: CustomerStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Both the search term and the status must match
    pub fn matches(&self, customer: &Customer) -> bool {
        let status_ok = self.status.map_or(true, |s| customer.status == s);
        status_ok && self.matches_search(customer)
    }

    fn matches_search(&self, customer: &Customer) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&customer.name, &customer.email, &customer.company]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Keep matching customers, preserving their order
    pub fn apply(&self, customers: &[Customer]) -> Vec<Customer> {
        customers
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}
