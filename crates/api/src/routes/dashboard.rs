//! Dashboard route.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use spendwise_core::dashboard::{DashboardService, DashboardSummary};
use spendwise_shared::types::UserId;

use crate::AppState;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/dashboard", get(get_dashboard))
}

/// GET `/users/{user_id}/dashboard` - Totals, recent activity and monthly series.
async fn get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<DashboardSummary> {
    let transactions = state.store.transactions_of(user_id);
    Json(DashboardService::build(&transactions, state.clock.now()))
}
