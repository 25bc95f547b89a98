//! Service layer: orchestration between handlers and the repository.

pub mod customer_service;

pub use customer_service::CustomerService;
