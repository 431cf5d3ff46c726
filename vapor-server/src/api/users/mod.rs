//! User API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/users", user_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(handler::get_or_create).put(handler::save))
}
