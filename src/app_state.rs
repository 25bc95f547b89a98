//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::CustomerService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// The repository behind [`CustomerService`] is injected at startup,
/// so tests can substitute the in-memory implementation for PostgreSQL.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Customer service for all business logic.
    pub customer_service: Arc<CustomerService>,
}
