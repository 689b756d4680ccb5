/// Customer domain types
use super::CustomerId;
use crate::error::{PulseError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Account lifecycle state
    CustomerStatus {
        Active => "active",
        Inactive => "inactive",
        Trial => "trial",
    }
}

wire_enum! {
    /// Subscription tier
    Plan {
        Free => "free",
        Starter => "starter",
        Pro => "pro",
        Enterprise => "enterprise",
    }
}

/// A paying (or trialling) customer account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub status: CustomerStatus,
    pub plan: Plan,

    /// Monthly recurring revenue, never negative
    pub mrr: f64,

    pub joined_date: NaiveDate,
    pub last_active: NaiveDate,
}

impl Customer {
    /// Check field invariants before the record is persisted
    pub fn validate(&self) -> Result<()> {
        if self.mrr.is_nan() || self.mrr < 0.0 {
            return Err(PulseError::invalid_input(format!(
                "customer {} has negative mrr {}",
                self.id, self.mrr
            )));
        }
        if self.id.as_str().is_empty() {
            return Err(PulseError::invalid_input("customer id must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(mrr: f64) -> Customer {
        Customer {
            id: CustomerId::new("1"),
            name: "Carol Williams".to_string(),
            email: "carol@designstudio.com".to_string(),
            company: "Design Studio".to_string(),
            status: CustomerStatus::Trial,
            plan: Plan::Pro,
            mrr,
            joined_date: NaiveDate::from_ymd_opt(2025, 9, 28).unwrap(),
            last_active: NaiveDate::from_ymd_opt(2025, 10, 10).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_and_plain_dates() {
        let json = serde_json::to_value(customer(0.0)).unwrap();
        assert_eq!(json["status"], "trial");
        assert_eq!(json["plan"], "pro");
        assert_eq!(json["joinedDate"], "2025-09-28");
        assert_eq!(json["lastActive"], "2025-10-10");
    }

    #[test]
    fn negative_mrr_is_rejected() {
        assert!(customer(0.0).validate().is_ok());
        assert!(matches!(
            customer(-1.0).validate(),
            Err(PulseError::InvalidInput(_))
        ));
        assert!(customer(f64::NAN).validate().is_err());
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        assert_eq!("trial".parse::<CustomerStatus>().unwrap(), CustomerStatus::Trial);
        assert!("churned".parse::<CustomerStatus>().is_err());
        assert!("Active".parse::<CustomerStatus>().is_err());
    }

    #[test]
    fn every_variant_parses_from_its_wire_name() {
        for plan in Plan::ALL {
            assert_eq!(plan.as_str().parse::<Plan>().unwrap(), *plan);
        }
        for status in CustomerStatus::ALL {
            assert_eq!(status.to_string().parse::<CustomerStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn unknown_plan_is_rejected_by_serde() {
        let result: std::result::Result<Plan, _> = serde_json::from_str("\"platinum\"");
        assert!(result.is_err());
    }
}
