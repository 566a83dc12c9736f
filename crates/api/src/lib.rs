//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes scoped by user
//! - JSON error responses
//! - The shared application state

pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use spendwise_core::period::{Clock, SystemClock};
use spendwise_db::Store;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// In-memory record store.
    pub store: Store,
    /// Source of "now" for period resolution and timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state over `store` with the given clock.
    pub fn new(store: Store, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Store::new(), Arc::new(SystemClock))
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Same as [`create_router`] with a per-request timeout.
pub fn create_router_with_timeout(state: AppState, timeout: Duration) -> Router {
    create_router(state).layer(TimeoutLayer::new(timeout))
}
