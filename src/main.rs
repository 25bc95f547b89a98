//! customer-gateway server entry point.
//!
//! Starts the Axum HTTP server with all customer REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use customer_gateway::api;
use customer_gateway::app_state::AppState;
use customer_gateway::config::GatewayConfig;
use customer_gateway::persistence::postgres::PostgresRepository;
use customer_gateway::service::CustomerService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting customer-gateway");

    // Lazy pool: connectivity problems surface per request, and through
    // the /check-db-connection endpoint.
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect_lazy(&config.database_url)?;

    // Build service layer with the injected repository
    let repository = Arc::new(PostgresRepository::new(pool));
    let customer_service = Arc::new(CustomerService::new(repository));

    // Build application state
    let app_state = AppState { customer_service };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
