//! Transaction routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use spendwise_core::transaction::{
    CreateTransactionInput, Transaction, TransactionFilter, UpdateTransactionInput,
};
use spendwise_db::TransactionRepository;
use spendwise_shared::types::{TransactionId, UserId};
use tracing::info;

use crate::{AppState, ApiResult};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/users/{user_id}/transactions/{transaction_id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

/// GET `/users/{user_id}/transactions` - List transactions, newest first.
///
/// Query parameters: `category`, `type`, `start_date`, `end_date`, `search`.
async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(filter): Query<TransactionFilter>,
) -> Json<Vec<Transaction>> {
    let repo = TransactionRepository::new(state.store.clone());
    Json(repo.list(user_id, &filter))
}

/// POST `/users/{user_id}/transactions` - Record a transaction.
async fn create_transaction(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(payload): Json<CreateTransactionInput>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let repo = TransactionRepository::new(state.store.clone());
    let transaction = repo.create(user_id, payload, state.clock.now())?;

    info!(
        user_id = %user_id,
        transaction_id = %transaction.id,
        amount = %transaction.amount,
        "Transaction created"
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET `/users/{user_id}/transactions/{transaction_id}`
async fn get_transaction(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(UserId, TransactionId)>,
) -> ApiResult<Json<Transaction>> {
    let repo = TransactionRepository::new(state.store.clone());
    Ok(Json(repo.get(user_id, transaction_id)?))
}

/// PUT `/users/{user_id}/transactions/{transaction_id}` - Partial update.
async fn update_transaction(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(UserId, TransactionId)>,
    Json(payload): Json<UpdateTransactionInput>,
) -> ApiResult<Json<Transaction>> {
    let repo = TransactionRepository::new(state.store.clone());
    let transaction = repo.update(user_id, transaction_id, payload, state.clock.now())?;

    info!(user_id = %user_id, transaction_id = %transaction_id, "Transaction updated");

    Ok(Json(transaction))
}

/// DELETE `/users/{user_id}/transactions/{transaction_id}`
async fn delete_transaction(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(UserId, TransactionId)>,
) -> ApiResult<StatusCode> {
    let repo = TransactionRepository::new(state.store.clone());
    repo.delete(user_id, transaction_id)?;

    info!(user_id = %user_id, transaction_id = %transaction_id, "Transaction deleted");

    Ok(StatusCode::NO_CONTENT)
}
