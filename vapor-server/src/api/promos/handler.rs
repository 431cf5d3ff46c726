//! Promo API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::AppState;
use crate::db::models::{Promo, PromoApplied, PromoCreate};
use crate::db::repository::PromoRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_range, validate_required_text};
use crate::utils::{AppResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct ApplyPromoBody {
    pub code: String,
    pub user_id: i64,
}

/// GET /api/promos - all codes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Promo>>> {
    let repo = PromoRepository::new(state.store.clone());
    Ok(Json(repo.list().await?))
}

/// POST /api/promos - create a code
pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<PromoCreate>,
) -> AppResult<Json<AppResponse<Promo>>> {
    validate_required_text(&data.code, "code", MAX_NAME_LEN)?;
    validate_range(data.discount, "discount", 1, 100)?;
    validate_range(data.uses, "uses", 1, i64::MAX)?;

    let repo = PromoRepository::new(state.store.clone());
    let promo = repo.create(data).await?;
    Ok(Json(AppResponse::success(promo)))
}

/// POST /api/promos/apply - redeem a code for a user
pub async fn apply(
    State(state): State<AppState>,
    Json(body): Json<ApplyPromoBody>,
) -> AppResult<Json<AppResponse<PromoApplied>>> {
    validate_required_text(&body.code, "code", MAX_NAME_LEN)?;

    let repo = PromoRepository::new(state.store.clone());
    let applied = repo.apply(&body.code, body.user_id).await?;
    Ok(Json(AppResponse::success(applied)))
}
