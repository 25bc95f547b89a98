//! Customer DTOs for create, update, list, and aggregate operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Customer, CustomerId, CustomerUpdate, NewCustomer};

/// Request body for `POST /customer/create`.
///
/// Unknown fields are rejected; `credit` defaults to zero when omitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCustomerRequest {
    /// Customer name.
    pub name: String,
    /// Initial credit balance. Defaults to 0.
    #[serde(default)]
    pub credit: i64,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            name: req.name,
            credit: req.credit,
        }
    }
}

/// Request body for `PUT /customer/update/{id}`.
///
/// Unknown fields are rejected; absent fields keep their stored values.
/// A body that sets neither field is rejected with 400.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCustomerRequest {
    /// New name, if provided.
    #[serde(default)]
    pub name: Option<String>,
    /// New credit balance, if provided.
    #[serde(default)]
    pub credit: Option<i64>,
}

impl From<UpdateCustomerRequest> for CustomerUpdate {
    fn from(req: UpdateCustomerRequest) -> Self {
        Self {
            name: req.name,
            credit: req.credit,
        }
    }
}

/// A customer record as returned by every read endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerDto {
    /// Unique identifier.
    pub id: CustomerId,
    /// Customer name.
    pub name: String,
    /// Credit balance.
    pub credit: i64,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            credit: customer.credit,
        }
    }
}

/// Response body for `GET /customer/sumCredit`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SumCreditResponse {
    /// Aggregate container keyed `_sum` on the wire.
    #[serde(rename = "_sum")]
    pub sum: CreditSum,
}

/// Inner `_sum` object.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreditSum {
    /// Sum of all credit balances; zero for an empty table.
    pub credit: i64,
}

/// Response body for `GET /customer/maxCredit`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaxCreditResponse {
    /// Maximum credit balance; `null` for an empty table.
    #[serde(rename = "maxCredit")]
    pub max_credit: Option<i64>,
}

/// Response body for `GET /customer/minCredit`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MinCreditResponse {
    /// Minimum credit balance; `null` for an empty table.
    #[serde(rename = "minCredit")]
    pub min_credit: Option<i64>,
}

/// Response body for `GET /customer/avgCredit`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AvgCreditResponse {
    /// Average credit balance; `null` for an empty table.
    #[serde(rename = "avgCredit")]
    pub avg_credit: Option<f64>,
}
