//! API route definitions.
//!
//! Every resource route is scoped by a `{user_id}` path segment.

use axum::Router;

use crate::AppState;

pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(transactions::routes())
        .merge(categories::routes())
        .merge(budgets::routes())
        .merge(dashboard::routes())
}
