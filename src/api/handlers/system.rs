//! System endpoints: database connectivity check and health.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::MessageResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status indicator.
    pub status: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}

/// `GET /check-db-connection` — Verify database connectivity.
///
/// # Errors
///
/// Returns [`GatewayError::DatabaseError`] when the database is
/// unreachable.
#[utoipa::path(
    get,
    path = "/check-db-connection",
    tag = "System",
    summary = "Check database connectivity",
    description = "Runs a trivial query against the database and reports the outcome.",
    responses(
        (status = 200, description = "Database reachable", body = MessageResponse),
        (status = 500, description = "Database unreachable", body = ErrorResponse),
    )
)]
pub async fn check_db_connection(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    state.customer_service.check_connection().await?;
    Ok(Json(MessageResponse::new("Connected to the database")))
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/check-db-connection", get(check_db_connection))
        .route("/health", get(health_handler))
}
