//! Persistence layer: the customer repository abstraction.
//!
//! Provides the [`CustomerRepository`] trait for storage of customer
//! records. The concrete implementation uses `sqlx::PgPool` for async
//! PostgreSQL access; an in-memory implementation backs tests and
//! local development.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Customer, CustomerFilter, CustomerId, CustomerOrder, CustomerUpdate};
use crate::error::GatewayError;

/// Storage operations over the `customers` table.
///
/// Every gateway route resolves to exactly one call on this trait.
/// Implementations must be `Send + Sync` so they can be shared across
/// request handlers behind an `Arc`.
#[async_trait]
pub trait CustomerRepository: Send + Sync + std::fmt::Debug {
    /// Verifies that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] when the store cannot
    /// be reached.
    async fn check_connection(&self) -> Result<(), GatewayError>;

    /// Inserts a new customer record and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] on storage failure,
    /// including primary key violations.
    async fn insert(&self, customer: Customer) -> Result<Customer, GatewayError>;

    /// Returns all customers matching `filter`, optionally ordered.
    ///
    /// An empty filter matches every record. Without an explicit order
    /// the result order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] on storage failure.
    async fn find_many(
        &self,
        filter: CustomerFilter,
        order: Option<CustomerOrder>,
    ) -> Result<Vec<Customer>, GatewayError>;

    /// Applies a partial update to the customer with the given ID and
    /// returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::CustomerNotFound`] when no such customer
    /// exists, or [`GatewayError::DatabaseError`] on storage failure.
    async fn update(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, GatewayError>;

    /// Deletes the customer with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::CustomerNotFound`] when no such customer
    /// exists, or [`GatewayError::DatabaseError`] on storage failure.
    async fn delete(&self, id: CustomerId) -> Result<(), GatewayError>;

    /// Sum of all credit balances. Zero when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] on storage failure.
    async fn sum_credit(&self) -> Result<i64, GatewayError>;

    /// Maximum credit balance, or `None` when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] on storage failure.
    async fn max_credit(&self) -> Result<Option<i64>, GatewayError>;

    /// Minimum credit balance, or `None` when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] on storage failure.
    async fn min_credit(&self) -> Result<Option<i64>, GatewayError>;

    /// Average credit balance, or `None` when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseError`] on storage failure.
    async fn avg_credit(&self) -> Result<Option<f64>, GatewayError>;
}
