//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::AppState;
use crate::db::models::{Product, ProductSave};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_TEXT_LEN, validate_non_negative, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult};

fn validate(data: &ProductSave) -> AppResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.category, "category", MAX_NAME_LEN)?;
    validate_non_negative(data.price, "price")?;
    validate_non_negative(data.stock, "stock")?;
    if let Some(description) = &data.description {
        validate_required_text(description, "description", MAX_TEXT_LEN)?;
    }
    Ok(())
}

/// GET /api/products - full catalog, ascending by id
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.store.clone());
    Ok(Json(repo.list().await?))
}

/// POST /api/products - create a product (id always allocator-assigned)
pub async fn create(
    State(state): State<AppState>,
    Json(mut data): Json<ProductSave>,
) -> AppResult<Json<AppResponse<Product>>> {
    data.id = None;
    validate(&data)?;

    let repo = ProductRepository::new(state.store.clone());
    let product = repo.save(data).await?;
    Ok(Json(AppResponse::success(product)))
}

/// PUT /api/products/{id} - full overwrite of an existing product
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut data): Json<ProductSave>,
) -> AppResult<Json<AppResponse<Product>>> {
    data.id = Some(id);
    validate(&data)?;

    let repo = ProductRepository::new(state.store.clone());
    let product = repo.save(data).await?;
    Ok(Json(AppResponse::success(product)))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<bool>>> {
    let repo = ProductRepository::new(state.store.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found(format!("Product {id}")));
    }
    Ok(Json(AppResponse::success(true)))
}
