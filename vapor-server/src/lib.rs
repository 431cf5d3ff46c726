//! Vapor Server - vape shop storefront backend
//!
//! # Architecture Overview
//!
//! Typed domain entities persisted in a schemaless key-value store; the
//! repository layer owns id assignment, field coercion and the derived
//! statistics view, the HTTP layer is thin glue over it.
//!
//! # Module Structure
//!
//! ```text
//! vapor-server/src/
//! ├── core/          # configuration, state, server bootstrap
//! ├── store/         # key-value store client (Redis + in-memory)
//! ├── db/            # models, repositories, catalog seeding
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, time, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{AppState, Config, Server};
pub use db::repository::{RepoError, RepoResult};
pub use store::{KvStore, MemoryStore, RedisStore, StoreError};
pub use utils::{AppError, AppResponse, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
