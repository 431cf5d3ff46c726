//! Promo Model

use serde::{Deserialize, Serialize};

use super::fields::{self, FieldMap};
use crate::db::repository::RepoResult;

/// Promo code — the code itself is the record key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promo {
    pub code: String,
    /// Discount percentage (e.g. 15 = 15%)
    pub discount: i64,
    /// Maximum redemptions
    pub uses: i64,
    /// Redemption counter; only ever incremented
    pub used: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Creation payload; `used` always starts at 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoCreate {
    pub code: String,
    pub discount: i64,
    pub uses: i64,
}

/// Successful redemption result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoApplied {
    pub code: String,
    pub discount: i64,
    pub used: i64,
}

impl Promo {
    pub(crate) fn to_fields(&self) -> Vec<(String, String)> {
        vec![
            ("code".into(), self.code.clone()),
            ("discount".into(), self.discount.to_string()),
            ("uses".into(), self.uses.to_string()),
            ("used".into(), self.used.to_string()),
            ("created_at".into(), self.created_at.to_string()),
            ("updated_at".into(), self.updated_at.to_string()),
        ]
    }

    pub(crate) fn from_fields(record: &FieldMap) -> RepoResult<Self> {
        Ok(Self {
            code: fields::string(record, "code"),
            discount: fields::i64_or(record, "discount", 0)?,
            uses: fields::i64_or(record, "uses", 0)?,
            used: fields::i64_or(record, "used", 0)?,
            created_at: fields::i64_or(record, "created_at", 0)?,
            updated_at: fields::i64_or(record, "updated_at", 0)?,
        })
    }
}
