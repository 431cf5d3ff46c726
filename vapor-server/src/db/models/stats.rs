//! Stats Model
//!
//! Singleton materialized view over the whole entity set, recomputed
//! wholesale rather than maintained incrementally.

use serde::{Deserialize, Serialize};

use super::fields::{self, FieldMap};
use crate::db::repository::RepoResult;

/// Aggregate shop statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_orders: i64,
    pub total_products: i64,
    pub total_users: i64,
    /// Sum of `total` over orders whose current status is "completed"
    pub total_revenue: i64,
    pub updated_at: i64,
}

impl Stats {
    pub(crate) fn to_fields(&self) -> Vec<(String, String)> {
        vec![
            ("total_orders".into(), self.total_orders.to_string()),
            ("total_products".into(), self.total_products.to_string()),
            ("total_users".into(), self.total_users.to_string()),
            ("total_revenue".into(), self.total_revenue.to_string()),
            ("updated_at".into(), self.updated_at.to_string()),
        ]
    }

    pub(crate) fn from_fields(record: &FieldMap) -> RepoResult<Self> {
        Ok(Self {
            total_orders: fields::i64_or(record, "total_orders", 0)?,
            total_products: fields::i64_or(record, "total_products", 0)?,
            total_users: fields::i64_or(record, "total_users", 0)?,
            total_revenue: fields::i64_or(record, "total_revenue", 0)?,
            updated_at: fields::i64_or(record, "updated_at", 0)?,
        })
    }
}
