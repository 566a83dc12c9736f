//! Budget management routes.
//!
//! Write paths accept only `monthly`, `quarterly` or `yearly`. Read paths
//! fall back to monthly for anything else.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use spendwise_core::budget::{
    Budget, BudgetError, BudgetService, BudgetSummaryReport, CreateBudgetInput, UpdateBudgetInput,
};
use spendwise_core::period::BudgetPeriod;
use spendwise_db::{BudgetRepository, BudgetRepositoryError};
use spendwise_shared::types::{BudgetId, UserId};
use tracing::{info, warn};

use crate::{AppState, ApiResult};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/budgets",
            get(list_budgets).post(create_budget),
        )
        .route("/users/{user_id}/budgets/summary", get(get_budget_summary))
        .route(
            "/users/{user_id}/budgets/{budget_id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
}

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters selecting a budget period.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    /// Period keyword; defaults to monthly.
    pub period: Option<String>,
}

/// Request body for creating a budget.
#[derive(Debug, Deserialize)]
pub struct CreateBudgetRequest {
    /// Category the limit applies to.
    pub category: String,
    /// Spending limit.
    pub amount: Decimal,
    /// `monthly`, `quarterly` or `yearly`.
    pub period: String,
    /// Defaults to the time of the request.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional end of the budget's life.
    pub end_date: Option<DateTime<Utc>>,
}

/// Request body for updating a budget. Absent fields are unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    /// New category.
    pub category: Option<String>,
    /// New limit.
    pub amount: Option<Decimal>,
    /// New period keyword.
    pub period: Option<String>,
    /// New start date.
    pub start_date: Option<DateTime<Utc>>,
    /// New end date.
    pub end_date: Option<DateTime<Utc>>,
}

impl TryFrom<CreateBudgetRequest> for CreateBudgetInput {
    type Error = BudgetError;

    fn try_from(req: CreateBudgetRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            category: req.category,
            amount: req.amount,
            period: req.period.parse()?,
            start_date: req.start_date,
            end_date: req.end_date,
        })
    }
}

impl TryFrom<UpdateBudgetRequest> for UpdateBudgetInput {
    type Error = BudgetError;

    fn try_from(req: UpdateBudgetRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            category: req.category,
            amount: req.amount,
            period: req
                .period
                .as_deref()
                .map(str::parse::<BudgetPeriod>)
                .transpose()?,
            start_date: req.start_date,
            end_date: req.end_date,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolves the requested period for read paths, defaulting to monthly.
fn effective_period(query: &PeriodQuery) -> BudgetPeriod {
    let Some(keyword) = query.period.as_deref() else {
        return BudgetPeriod::default();
    };

    let period = BudgetPeriod::from_keyword(keyword);
    if period.as_str() != keyword {
        warn!(requested = %keyword, effective = %period, "Unknown budget period");
    }
    period
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/users/{user_id}/budgets?period=` - List budgets for one period.
async fn list_budgets(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(query): Query<PeriodQuery>,
) -> Json<Vec<Budget>> {
    let repo = BudgetRepository::new(state.store.clone());
    Json(repo.list(user_id, effective_period(&query)))
}

/// POST `/users/{user_id}/budgets` - Create a budget.
///
/// One budget per category and period; a second one is a 409.
async fn create_budget(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(payload): Json<CreateBudgetRequest>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let input = CreateBudgetInput::try_from(payload).map_err(BudgetRepositoryError::from)?;

    let repo = BudgetRepository::new(state.store.clone());
    let budget = repo.create(user_id, input, state.clock.now())?;

    info!(
        user_id = %user_id,
        budget_id = %budget.id,
        category = %budget.category,
        period = %budget.period,
        "Budget created"
    );

    Ok((StatusCode::CREATED, Json(budget)))
}

/// GET `/users/{user_id}/budgets/summary?period=` - Budget vs actual spending.
async fn get_budget_summary(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(query): Query<PeriodQuery>,
) -> Json<BudgetSummaryReport> {
    let period = effective_period(&query);
    let budgets = state.store.budgets_of(user_id);
    let transactions = state.store.transactions_of(user_id);

    Json(BudgetService::summarize(
        period,
        state.clock.now(),
        &budgets,
        &transactions,
    ))
}

/// GET `/users/{user_id}/budgets/{budget_id}`
async fn get_budget(
    State(state): State<AppState>,
    Path((user_id, budget_id)): Path<(UserId, BudgetId)>,
) -> ApiResult<Json<Budget>> {
    let repo = BudgetRepository::new(state.store.clone());
    Ok(Json(repo.get(user_id, budget_id)?))
}

/// PUT `/users/{user_id}/budgets/{budget_id}` - Partial update.
async fn update_budget(
    State(state): State<AppState>,
    Path((user_id, budget_id)): Path<(UserId, BudgetId)>,
    Json(payload): Json<UpdateBudgetRequest>,
) -> ApiResult<Json<Budget>> {
    let input = UpdateBudgetInput::try_from(payload).map_err(BudgetRepositoryError::from)?;

    let repo = BudgetRepository::new(state.store.clone());
    let budget = repo.update(user_id, budget_id, input, state.clock.now())?;

    info!(user_id = %user_id, budget_id = %budget_id, "Budget updated");

    Ok(Json(budget))
}

/// DELETE `/users/{user_id}/budgets/{budget_id}`
async fn delete_budget(
    State(state): State<AppState>,
    Path((user_id, budget_id)): Path<(UserId, BudgetId)>,
) -> ApiResult<StatusCode> {
    let repo = BudgetRepository::new(state.store.clone());
    repo.delete(user_id, budget_id)?;

    info!(user_id = %user_id, budget_id = %budget_id, "Budget deleted");

    Ok(StatusCode::NO_CONTENT)
}
