//! Database Layer
//!
//! Entities, field codecs and repositories over the key-value store.

pub mod models;
pub mod repository;
pub mod seed;
