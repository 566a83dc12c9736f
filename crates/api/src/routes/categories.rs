//! Category routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use spendwise_core::category::{Category, CategoryInput};
use spendwise_db::CategoryRepository;
use spendwise_shared::types::{CategoryId, UserId};
use tracing::info;

use crate::{AppState, ApiResult};

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/users/{user_id}/categories/{category_id}",
            put(rename_category).delete(delete_category),
        )
}

/// GET `/users/{user_id}/categories` - List categories sorted by name.
async fn list_categories(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<Vec<Category>> {
    let repo = CategoryRepository::new(state.store.clone());
    Json(repo.list(user_id))
}

/// POST `/users/{user_id}/categories`
async fn create_category(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(payload): Json<CategoryInput>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let repo = CategoryRepository::new(state.store.clone());
    let category = repo.create(user_id, &payload, state.clock.now())?;

    info!(user_id = %user_id, category_id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT `/users/{user_id}/categories/{category_id}` - Rename.
async fn rename_category(
    State(state): State<AppState>,
    Path((user_id, category_id)): Path<(UserId, CategoryId)>,
    Json(payload): Json<CategoryInput>,
) -> ApiResult<Json<Category>> {
    let repo = CategoryRepository::new(state.store.clone());
    let category = repo.rename(user_id, category_id, &payload)?;

    info!(user_id = %user_id, category_id = %category_id, name = %category.name, "Category renamed");

    Ok(Json(category))
}

/// DELETE `/users/{user_id}/categories/{category_id}`
///
/// Refused with 422 while transactions reference the category.
async fn delete_category(
    State(state): State<AppState>,
    Path((user_id, category_id)): Path<(UserId, CategoryId)>,
) -> ApiResult<StatusCode> {
    let repo = CategoryRepository::new(state.store.clone());
    repo.delete(user_id, category_id)?;

    info!(user_id = %user_id, category_id = %category_id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
