//! Statistics API Handlers

use axum::{Json, extract::State};

use crate::core::AppState;
use crate::db::models::Stats;
use crate::db::repository::StatsRepository;
use crate::utils::AppResult;

/// GET /api/stats - cached aggregates (computed on first read)
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let repo = StatsRepository::new(state.store.clone());
    Ok(Json(repo.get().await?))
}
