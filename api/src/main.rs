//! Japanese postal code address API
//!
//! Resolves a 7-digit zipcode into prefecture, city and town by delegating
//! to the ZipCloud API. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::ZipCloudAddressLookup;
use config::Config;
use domain::ports::AddressLookup;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub address_lookup: Arc<dyn AddressLookup>,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/v1/address", get(handlers::get_address))
        // Middleware
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,zipaddr_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting address API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        zipcloud_base_url = %config.zipcloud_base_url,
        timeout_secs = config.lookup_timeout.as_secs(),
        "Using ZipCloud lookup"
    );

    // One lookup adapter shared by every request
    let address_lookup: Arc<dyn AddressLookup> = Arc::new(ZipCloudAddressLookup::new(
        config.zipcloud_base_url.clone(),
        config.lookup_timeout,
    ));

    let app = router(AppState { address_lookup });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
