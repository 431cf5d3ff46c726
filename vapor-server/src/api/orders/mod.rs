//! Order API module

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/user/{user_id}", get(handler::list_by_user))
        .route("/{id}/status", patch(handler::update_status))
}
