//! In-memory implementation of the customer repository.
//!
//! Backs the test suite and local development without a PostgreSQL
//! instance. Behavior mirrors [`super::postgres::PostgresRepository`],
//! including the empty-table aggregate conventions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CustomerRepository;
use crate::domain::{Customer, CustomerFilter, CustomerId, CustomerOrder, CustomerUpdate};
use crate::error::GatewayError;

/// Customer repository holding all records in a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository {
    async fn check_connection(&self) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, GatewayError> {
        let mut map = self.customers.write().await;
        if map.contains_key(&customer.id) {
            return Err(GatewayError::DatabaseError(format!(
                "duplicate key: customer {} already exists",
                customer.id
            )));
        }
        map.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_many(
        &self,
        filter: CustomerFilter,
        order: Option<CustomerOrder>,
    ) -> Result<Vec<Customer>, GatewayError> {
        let map = self.customers.read().await;
        let mut result: Vec<Customer> = map
            .values()
            .filter(|c| filter.matches(&c.name, c.credit))
            .cloned()
            .collect();
        if let Some(CustomerOrder::NameAsc) = order {
            result.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(result)
    }

    async fn update(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, GatewayError> {
        let mut map = self.customers.write().await;
        let Some(existing) = map.get_mut(&id) else {
            return Err(GatewayError::CustomerNotFound(id));
        };
        let updated = update.apply(existing.clone());
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: CustomerId) -> Result<(), GatewayError> {
        let mut map = self.customers.write().await;
        map.remove(&id)
            .map(|_| ())
            .ok_or(GatewayError::CustomerNotFound(id))
    }

    async fn sum_credit(&self) -> Result<i64, GatewayError> {
        let map = self.customers.read().await;
        Ok(map.values().map(|c| c.credit).sum())
    }

    async fn max_credit(&self) -> Result<Option<i64>, GatewayError> {
        let map = self.customers.read().await;
        Ok(map.values().map(|c| c.credit).max())
    }

    async fn min_credit(&self) -> Result<Option<i64>, GatewayError> {
        let map = self.customers.read().await;
        Ok(map.values().map(|c| c.credit).min())
    }

    async fn avg_credit(&self) -> Result<Option<f64>, GatewayError> {
        let map = self.customers.read().await;
        if map.is_empty() {
            return Ok(None);
        }
        let sum: i64 = map.values().map(|c| c.credit).sum();
        #[allow(clippy::cast_precision_loss)]
        let avg = sum as f64 / map.len() as f64;
        Ok(Some(avg))
    }
}
