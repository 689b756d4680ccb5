//! Property tests for the local customer filter.

use chrono::NaiveDate;
use proptest::prelude::*;
use pulse_client::CustomerFilter;
use pulse_core::types::{Customer, CustomerId, CustomerStatus, Plan};

fn arb_status() -> impl Strategy<Value = CustomerStatus> {
    prop::sample::select(CustomerStatus::ALL.to_vec())
}

fn arb_customer() -> impl Strategy<Value = Customer> {
    (
        "[a-z0-9]{1,6}",
        "[A-Za-z ]{1,12}",
        "[a-z]{1,8}@[a-z]{1,6}\\.com",
        "[A-Za-z ]{1,12}",
        arb_status(),
        0.0f64..5000.0,
    )
        .prop_map(|(id, name, email, company, status, mrr)| {
            let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            Customer {
                id: CustomerId::new(id),
                name,
                email,
                company,
                status,
                plan: Plan::Starter,
                mrr,
                joined_date: day,
                last_active: day,
            }
        })
}

proptest! {
    #[test]
    fn filtered_is_ordered_subsequence(
        customers in prop::collection::vec(arb_customer(), 0..20),
        search in "[a-zA-Z]{0,3}",
        status in prop::option::of(arb_status()),
    ) {
        let filter = CustomerFilter { search, status };
        let filtered = filter.apply(&customers);

        prop_assert!(filtered.len() <= customers.len());

        let mut rest = customers.iter();
        for kept in &filtered {
            prop_assert!(rest.any(|c| c == kept));
        }
    }

    #[test]
    fn every_kept_customer_matches(
        customers in prop::collection::vec(arb_customer(), 0..20),
        search in "[a-zA-Z]{0,3}",
        status in prop::option::of(arb_status()),
    ) {
        let filter = CustomerFilter { search: search.clone(), status };
        let needle = search.to_lowercase();

        for c in filter.apply(&customers) {
            if let Some(s) = status {
                prop_assert_eq!(c.status, s);
            }
            let hit = [&c.name, &c.email, &c.company]
                .iter()
                .any(|f| f.to_lowercase().contains(&needle));
            prop_assert!(hit);
        }
    }

    #[test]
    fn search_ignores_case(
        customers in prop::collection::vec(arb_customer(), 0..20),
        search in "[a-zA-Z]{0,3}",
    ) {
        let lower = CustomerFilter::new(search.to_lowercase()).apply(&customers);
        let upper = CustomerFilter::new(search.to_uppercase()).apply(&customers);
        prop_assert_eq!(lower, upper);
    }
}
