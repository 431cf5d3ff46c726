//! Database Models
//!
//! One file per entity; each carries its struct, the request payloads, and
//! the `to_fields`/`from_fields` codec pair that maps it onto a store
//! record. All coercion lives in [`fields`].

// Codec helpers
pub mod fields;

// Entities
pub mod order;
pub mod product;
pub mod promo;
pub mod stats;
pub mod user;

// Re-exports
pub use order::{Order, OrderItem, OrderSave, STATUS_COMPLETED, STATUS_PENDING};
pub use product::{Product, ProductSave};
pub use promo::{Promo, PromoApplied, PromoCreate};
pub use stats::Stats;
pub use user::{User, UserSave};
