//! # customer-gateway
//!
//! REST gateway for a customer directory backed by PostgreSQL.
//!
//! This crate exposes an HTTP interface for creating, updating, deleting,
//! searching, and aggregating `Customer` records. All storage concerns are
//! delegated to the [`persistence::CustomerRepository`] trait — this service
//! is a translation layer from request shapes to repository queries.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── CustomerService (service/)
//!     │
//!     ├── CustomerRepository (persistence/)
//!     │       ├── PostgresRepository (sqlx)
//!     │       └── InMemoryRepository (tests, local development)
//!     │
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
