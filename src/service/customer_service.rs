//! Customer service: validates inputs, delegates to the repository,
//! and logs mutations.

use std::sync::Arc;

use crate::domain::{
    Customer, CustomerFilter, CustomerId, CustomerOrder, CustomerUpdate, NewCustomer,
};
use crate::error::GatewayError;
use crate::persistence::CustomerRepository;

/// Orchestration layer for all customer operations.
///
/// Stateless coordinator: owns a shared [`CustomerRepository`] and
/// performs exactly one repository call per operation. Identifier
/// generation happens here so that the repository only ever stores
/// fully-formed records.
#[derive(Debug, Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Creates a new `CustomerService`.
    #[must_use]
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Verifies connectivity to the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] when the store is
    /// unreachable.
    pub async fn check_connection(&self) -> Result<(), GatewayError> {
        self.repository.check_connection().await
    }

    /// Creates a customer with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the insert fails.
    pub async fn create(&self, new: NewCustomer) -> Result<Customer, GatewayError> {
        let customer = Customer {
            id: CustomerId::new(),
            name: new.name,
            credit: new.credit,
        };
        let stored = self.repository.insert(customer).await?;
        tracing::info!(customer_id = %stored.id, "customer created");
        Ok(stored)
    }

    /// Returns customers matching `filter`, optionally ordered.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the query fails.
    pub async fn find_many(
        &self,
        filter: CustomerFilter,
        order: Option<CustomerOrder>,
    ) -> Result<Vec<Customer>, GatewayError> {
        self.repository.find_many(filter, order).await
    }

    /// Applies a partial update to an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] when the update carries
    /// no fields, [`GatewayError::CustomerNotFound`] when the customer
    /// does not exist, or [`GatewayError::DatabaseError`] on storage
    /// failure.
    pub async fn update(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, GatewayError> {
        if update.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "update body must set at least one field".to_string(),
            ));
        }
        let updated = self.repository.update(id, update).await?;
        tracing::info!(customer_id = %id, "customer updated");
        Ok(updated)
    }

    /// Deletes an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::CustomerNotFound`] when the customer
    /// does not exist, or [`GatewayError::DatabaseError`] on storage
    /// failure.
    pub async fn delete(&self, id: CustomerId) -> Result<(), GatewayError> {
        self.repository.delete(id).await?;
        tracing::info!(customer_id = %id, "customer deleted");
        Ok(())
    }

    /// Sum of all credit balances (zero for an empty table).
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the aggregate query fails.
    pub async fn sum_credit(&self) -> Result<i64, GatewayError> {
        self.repository.sum_credit().await
    }

    /// Maximum credit balance, `None` for an empty table.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the aggregate query fails.
    pub async fn max_credit(&self) -> Result<Option<i64>, GatewayError> {
        self.repository.max_credit().await
    }

    /// Minimum credit balance, `None` for an empty table.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the aggregate query fails.
    pub async fn min_credit(&self) -> Result<Option<i64>, GatewayError> {
        self.repository.min_credit().await
    }

    /// Average credit balance, `None` for an empty table.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the aggregate query fails.
    pub async fn avg_credit(&self) -> Result<Option<f64>, GatewayError> {
        self.repository.avg_credit().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::memory::InMemoryRepository;

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let svc = service();
        let Ok(created) = svc
            .create(NewCustomer {
                name: "Zara".to_string(),
                credit: 500,
            })
            .await
        else {
            panic!("create failed");
        };

        let Ok(all) = svc.find_many(CustomerFilter::all(), None).await else {
            panic!("list failed");
        };
        assert!(all.iter().any(|c| c.id == created.id && c.credit == 500));
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let svc = service();
        let result = svc
            .update(CustomerId::new(), CustomerUpdate::default())
            .await;
        assert!(matches!(result, Err(GatewayError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn update_changes_stored_record() {
        let svc = service();
        let Ok(created) = svc
            .create(NewCustomer {
                name: "Zara".to_string(),
                credit: 500,
            })
            .await
        else {
            panic!("create failed");
        };

        let update = CustomerUpdate {
            name: None,
            credit: Some(750),
        };
        let Ok(updated) = svc.update(created.id, update).await else {
            panic!("update failed");
        };
        assert_eq!(updated.name, "Zara");
        assert_eq!(updated.credit, 750);
    }

    #[tokio::test]
    async fn delete_then_list_excludes_record() {
        let svc = service();
        let Ok(created) = svc
            .create(NewCustomer {
                name: "Zara".to_string(),
                credit: 500,
            })
            .await
        else {
            panic!("create failed");
        };
        let Ok(()) = svc.delete(created.id).await else {
            panic!("delete failed");
        };
        let Ok(all) = svc.find_many(CustomerFilter::all(), None).await else {
            panic!("list failed");
        };
        assert!(all.iter().all(|c| c.id != created.id));
    }

    #[tokio::test]
    async fn aggregates_flow_through() {
        let svc = service();
        for (name, credit) in [("A", 10), ("B", 20), ("C", 30)] {
            let Ok(_) = svc
                .create(NewCustomer {
                    name: name.to_string(),
                    credit,
                })
                .await
            else {
                panic!("create failed");
            };
        }
        assert_eq!(svc.sum_credit().await.ok(), Some(60));
        assert_eq!(svc.max_credit().await.ok(), Some(Some(30)));
        assert_eq!(svc.min_credit().await.ok(), Some(Some(10)));
        assert_eq!(svc.avg_credit().await.ok(), Some(Some(20.0)));
    }
}
