//! API routing module
//!
//! Thin glue: handlers validate input, build a repository from the shared
//! state and translate typed repository failures into HTTP responses. No
//! business logic lives here.
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`products`] - catalog management
//! - [`orders`] - checkout and order status
//! - [`users`] - profiles and referral data
//! - [`promos`] - promo codes and redemption
//! - [`stats`] - aggregate statistics
//! - [`broadcast`] - admin broadcast (log-only delivery)

pub mod broadcast;
pub mod health;
pub mod orders;
pub mod products;
pub mod promos;
pub mod stats;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Full application router with shared layers applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(users::router())
        .merge(promos::router())
        .merge(stats::router())
        .merge(broadcast::router())
        .layer(TraceLayer::new_for_http())
        // the storefront is a browser app served from elsewhere
        .layer(CorsLayer::permissive())
        .with_state(state)
}
