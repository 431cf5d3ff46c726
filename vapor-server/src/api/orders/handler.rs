//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::AppState;
use crate::db::models::{Order, OrderSave};
use crate::db::repository::OrderRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

/// GET /api/orders - all orders, most recent first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.store.clone());
    Ok(Json(repo.list().await?))
}

/// GET /api/orders/user/{user_id} - one user's orders, most recent first
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.store.clone());
    Ok(Json(repo.list_by_user(user_id).await?))
}

/// POST /api/orders - checkout
pub async fn create(
    State(state): State<AppState>,
    Json(mut data): Json<OrderSave>,
) -> AppResult<Json<AppResponse<Order>>> {
    data.id = None;
    if data.items.is_empty() {
        return Err(AppError::validation("order must contain at least one item"));
    }

    let repo = OrderRepository::new(state.store.clone());
    let order = repo.save(data).await?;
    Ok(Json(AppResponse::success(order)))
}

/// PATCH /api/orders/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusBody>,
) -> AppResult<Json<AppResponse<bool>>> {
    validate_required_text(&body.status, "status", MAX_NAME_LEN)?;

    let repo = OrderRepository::new(state.store.clone());
    if !repo.update_status(id, &body.status).await? {
        return Err(AppError::not_found(format!("Order {id}")));
    }
    Ok(Json(AppResponse::success(true)))
}
