//! Broadcast API Handlers
//!
//! There is no delivery channel wired up; a broadcast is recorded in the
//! log together with how many profiles it would have reached.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::AppState;
use crate::db::repository::UserRepository;
use crate::utils::validation::{MAX_TEXT_LEN, validate_required_text};
use crate::utils::{AppResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct BroadcastBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BroadcastResult {
    pub recipients: usize,
}

/// POST /api/broadcast
pub async fn broadcast(
    State(state): State<AppState>,
    Json(body): Json<BroadcastBody>,
) -> AppResult<Json<AppResponse<BroadcastResult>>> {
    validate_required_text(&body.message, "message", MAX_TEXT_LEN)?;

    let repo = UserRepository::new(state.store.clone(), state.admins.clone());
    let recipients = repo.count().await?;

    tracing::info!(recipients, message = %body.message, "Broadcast requested");
    Ok(Json(AppResponse::success(BroadcastResult { recipients })))
}
