//! Customer entity and its creation/update payloads.

use serde::{Deserialize, Serialize};

use super::CustomerId;

/// A customer record as stored in the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, immutable after creation.
    pub id: CustomerId,
    /// Customer name.
    pub name: String,
    /// Credit balance. Signed; zero by default.
    pub credit: i64,
}

/// Fields required to create a new customer.
///
/// The identifier is generated by the service layer, never supplied
/// by the caller.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    /// Customer name.
    pub name: String,
    /// Initial credit balance.
    pub credit: i64,
}

/// Partial update applied to an existing customer.
///
/// Only the fields present in the request body are applied; absent
/// fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    /// New name, if provided.
    pub name: Option<String>,
    /// New credit balance, if provided.
    pub credit: Option<i64>,
}

impl CustomerUpdate {
    /// Returns `true` when the update carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.credit.is_none()
    }

    /// Applies this update to an existing record, returning the result.
    #[must_use]
    pub fn apply(self, mut customer: Customer) -> Customer {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(credit) = self.credit {
            customer.credit = credit;
        }
        customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer {
            id: CustomerId::new(),
            name: "Zara".to_string(),
            credit: 500,
        }
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(CustomerUpdate::default().is_empty());
        let update = CustomerUpdate {
            name: None,
            credit: Some(0),
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn apply_replaces_only_present_fields() {
        let customer = sample();
        let id = customer.id;
        let update = CustomerUpdate {
            name: None,
            credit: Some(1_000),
        };
        let updated = update.apply(customer);
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Zara");
        assert_eq!(updated.credit, 1_000);
    }
}
