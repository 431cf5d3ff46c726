//! User API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::AppState;
use crate::db::models::{User, UserSave};
use crate::db::repository::UserRepository;
use crate::utils::validation::validate_non_negative;
use crate::utils::{AppResponse, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct GetUserQuery {
    /// Display name picked up on first contact, ignored afterwards
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveUserBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bonus: i64,
    #[serde(default)]
    pub referrals: Vec<i64>,
    #[serde(default)]
    pub referral_code: Option<String>,
}

/// GET /api/users/{id} - load a profile, creating it on first read
pub async fn get_or_create(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<GetUserQuery>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.store.clone(), state.admins.clone());
    Ok(Json(repo.get_or_create(id, &query.username).await?))
}

/// PUT /api/users/{id} - overwrite the profile
pub async fn save(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SaveUserBody>,
) -> AppResult<Json<AppResponse<User>>> {
    validate_non_negative(body.bonus, "bonus")?;

    let repo = UserRepository::new(state.store.clone(), state.admins.clone());
    let user = repo
        .save(UserSave {
            id,
            username: body.username,
            bonus: body.bonus,
            referrals: body.referrals,
            referral_code: body.referral_code,
        })
        .await?;
    Ok(Json(AppResponse::success(user)))
}
