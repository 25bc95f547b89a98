//! Domain layer: customer entity, identifiers, and query descriptions.

pub mod customer;
pub mod customer_id;
pub mod filter;

pub use customer::{Customer, CustomerUpdate, NewCustomer};
pub use customer_id::CustomerId;
pub use filter::{CreditFilter, CustomerFilter, CustomerOrder, NameMatch};
