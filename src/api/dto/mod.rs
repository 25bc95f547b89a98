//! Data Transfer Objects for REST request/response serialization.
//!
//! Response field names follow the original wire contract: aggregate
//! bodies use camelCase keys (`maxCredit`) and the sum endpoint nests
//! its value under `_sum`.

pub mod common_dto;
pub mod customer_dto;

pub use common_dto::*;
pub use customer_dto::*;
