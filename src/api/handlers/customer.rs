//! Customer route handlers: CRUD, filtered search, ordering, and
//! credit aggregates.
//!
//! Each handler translates the request shape into one
//! [`CustomerService`] call and serializes the outcome. The hardcoded
//! predicates on `whereAnd` and `listBetweenCredit` are part of the
//! wire contract.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::api::dto::{
    AvgCreditResponse, CreateCustomerRequest, CreditSum, CustomerDto, KeywordParams,
    MaxCreditResponse, MessageResponse, MinCreditResponse, SumCreditResponse,
    UpdateCustomerRequest,
};
use crate::api::extract::JsonOrForm;
use crate::app_state::AppState;
use crate::domain::{CreditFilter, CustomerFilter, CustomerId, CustomerOrder, NameMatch};
use crate::error::{ErrorResponse, GatewayError};

/// Keyword baked into the `whereAnd` route.
const AND_NAME_KEYWORD: &str = "z";
/// Inclusive lower bound of the `listBetweenCredit` range.
const CREDIT_RANGE_MIN: i64 = 1_000;
/// Exclusive upper bound of the `listBetweenCredit` range.
const CREDIT_RANGE_MAX: i64 = 200_000;

/// `POST /customer/create` — Create a customer.
///
/// # Errors
///
/// Returns [`GatewayError`] on a malformed body or storage failure.
#[utoipa::path(
    post,
    path = "/customer/create",
    tag = "Customers",
    summary = "Create a customer",
    description = "Inserts a customer record. `credit` defaults to 0 when omitted; unknown fields are rejected.",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Created record", body = CustomerDto),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreateCustomerRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let customer = state.customer_service.create(req.into()).await?;
    Ok(Json(CustomerDto::from(customer)))
}

/// `GET /customer/list` — List all customers.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/list",
    tag = "Customers",
    summary = "List all customers",
    responses(
        (status = 200, description = "All records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let customers = state
        .customer_service
        .find_many(CustomerFilter::all(), None)
        .await?;
    Ok(Json(to_dtos(customers)))
}

/// `PUT /customer/update/{id}` — Apply a partial update.
///
/// # Errors
///
/// Returns [`GatewayError`] on a malformed or empty body, an unknown
/// id, or storage failure.
#[utoipa::path(
    put,
    path = "/customer/update/{id}",
    tag = "Customers",
    summary = "Update a customer",
    description = "Applies the provided fields to the customer. A body setting no fields is rejected.",
    params(
        ("id" = uuid::Uuid, Path, description = "Customer UUID"),
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Updated record", body = CustomerDto),
        (status = 400, description = "Malformed or empty body", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    JsonOrForm(req): JsonOrForm<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let customer = state
        .customer_service
        .update(CustomerId::from_uuid(id), req.into())
        .await?;
    Ok(Json(CustomerDto::from(customer)))
}

/// `DELETE /customer/delete/{id}` — Delete a customer.
///
/// # Errors
///
/// Returns [`GatewayError`] on an unknown id or storage failure.
#[utoipa::path(
    delete,
    path = "/customer/delete/{id}",
    tag = "Customers",
    summary = "Delete a customer",
    params(
        ("id" = uuid::Uuid, Path, description = "Customer UUID"),
    ),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .customer_service
        .delete(CustomerId::from_uuid(id))
        .await?;
    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}

/// `GET /customer/startsWith` — Customers whose name starts with the keyword.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/startsWith",
    tag = "Customers",
    summary = "Search by name prefix",
    params(KeywordParams),
    responses(
        (status = 200, description = "Matching records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn starts_with(
    State(state): State<AppState>,
    Query(params): Query<KeywordParams>,
) -> Result<impl IntoResponse, GatewayError> {
    find_by_name(&state, NameMatch::Prefix(params.keyword)).await
}

/// `GET /customer/endsWith` — Customers whose name ends with the keyword.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/endsWith",
    tag = "Customers",
    summary = "Search by name suffix",
    params(KeywordParams),
    responses(
        (status = 200, description = "Matching records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn ends_with(
    State(state): State<AppState>,
    Query(params): Query<KeywordParams>,
) -> Result<impl IntoResponse, GatewayError> {
    find_by_name(&state, NameMatch::Suffix(params.keyword)).await
}

/// `GET /customer/contains` — Customers whose name contains the keyword.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/contains",
    tag = "Customers",
    summary = "Search by name substring",
    params(KeywordParams),
    responses(
        (status = 200, description = "Matching records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn contains(
    State(state): State<AppState>,
    Query(params): Query<KeywordParams>,
) -> Result<impl IntoResponse, GatewayError> {
    find_by_name(&state, NameMatch::Contains(params.keyword)).await
}

/// `GET /customer/findCreditIsNotZero` — Customers with non-zero credit.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/findCreditIsNotZero",
    tag = "Customers",
    summary = "Customers with non-zero credit",
    responses(
        (status = 200, description = "Matching records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn find_credit_is_not_zero(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let customers = state
        .customer_service
        .find_many(CustomerFilter::by_credit(CreditFilter::NotZero), None)
        .await?;
    Ok(Json(to_dtos(customers)))
}

/// `GET /customer/sortByName` — All customers ordered by name ascending.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/sortByName",
    tag = "Customers",
    summary = "List ordered by name",
    responses(
        (status = 200, description = "Ordered records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn sort_by_name(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let customers = state
        .customer_service
        .find_many(CustomerFilter::all(), Some(CustomerOrder::NameAsc))
        .await?;
    Ok(Json(to_dtos(customers)))
}

/// `GET /customer/whereAnd` — Name contains "z" and credit is positive.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/whereAnd",
    tag = "Customers",
    summary = "Conjunction sample query",
    description = "Customers whose name contains \"z\" and whose credit is greater than 0.",
    responses(
        (status = 200, description = "Matching records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn where_and(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let filter = CustomerFilter {
        name: Some(NameMatch::Contains(AND_NAME_KEYWORD.to_string())),
        credit: Some(CreditFilter::GreaterThan(0)),
    };
    let customers = state.customer_service.find_many(filter, None).await?;
    Ok(Json(to_dtos(customers)))
}

/// `GET /customer/listBetweenCredit` — Credit in `[1000, 200000)`.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/listBetweenCredit",
    tag = "Customers",
    summary = "Credit range sample query",
    description = "Customers with credit at least 1000 and below 200000.",
    responses(
        (status = 200, description = "Matching records", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_between_credit(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let filter = CustomerFilter::by_credit(CreditFilter::Between {
        min: CREDIT_RANGE_MIN,
        max: CREDIT_RANGE_MAX,
    });
    let customers = state.customer_service.find_many(filter, None).await?;
    Ok(Json(to_dtos(customers)))
}

/// `GET /customer/sumCredit` — Sum of all credit balances.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/sumCredit",
    tag = "Aggregates",
    summary = "Sum of credit",
    responses(
        (status = 200, description = "Aggregate result", body = SumCreditResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn sum_credit(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let credit = state.customer_service.sum_credit().await?;
    Ok(Json(SumCreditResponse {
        sum: CreditSum { credit },
    }))
}

/// `GET /customer/maxCredit` — Maximum credit balance.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/maxCredit",
    tag = "Aggregates",
    summary = "Maximum credit",
    responses(
        (status = 200, description = "Aggregate result", body = MaxCreditResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn max_credit(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let max_credit = state.customer_service.max_credit().await?;
    Ok(Json(MaxCreditResponse { max_credit }))
}

/// `GET /customer/minCredit` — Minimum credit balance.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/minCredit",
    tag = "Aggregates",
    summary = "Minimum credit",
    responses(
        (status = 200, description = "Aggregate result", body = MinCreditResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn min_credit(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let min_credit = state.customer_service.min_credit().await?;
    Ok(Json(MinCreditResponse { min_credit }))
}

/// `GET /customer/avgCredit` — Average credit balance.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/customer/avgCredit",
    tag = "Aggregates",
    summary = "Average credit",
    responses(
        (status = 200, description = "Aggregate result", body = AvgCreditResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn avg_credit(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let avg_credit = state.customer_service.avg_credit().await?;
    Ok(Json(AvgCreditResponse { avg_credit }))
}

/// Customer routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customer/create", post(create_customer))
        .route("/customer/list", get(list_customers))
        .route("/customer/update/{id}", put(update_customer))
        .route("/customer/delete/{id}", delete(delete_customer))
        .route("/customer/startsWith", get(starts_with))
        .route("/customer/endsWith", get(ends_with))
        .route("/customer/contains", get(contains))
        .route("/customer/findCreditIsNotZero", get(find_credit_is_not_zero))
        .route("/customer/sortByName", get(sort_by_name))
        .route("/customer/whereAnd", get(where_and))
        .route("/customer/listBetweenCredit", get(list_between_credit))
        .route("/customer/sumCredit", get(sum_credit))
        .route("/customer/maxCredit", get(max_credit))
        .route("/customer/minCredit", get(min_credit))
        .route("/customer/avgCredit", get(avg_credit))
}

async fn find_by_name(
    state: &AppState,
    name: NameMatch,
) -> Result<Json<Vec<CustomerDto>>, GatewayError> {
    let customers = state
        .customer_service
        .find_many(CustomerFilter::by_name(name), None)
        .await?;
    Ok(Json(to_dtos(customers)))
}

fn to_dtos(customers: Vec<crate::domain::Customer>) -> Vec<CustomerDto> {
    customers.into_iter().map(CustomerDto::from).collect()
}
