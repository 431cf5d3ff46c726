//! Order Model
//!
//! Order status is an open string set — storefront and admin flows may
//! introduce new states. The core only interprets the two below.

use serde::{Deserialize, Serialize};

use super::fields::{self, FieldMap};
use crate::db::repository::RepoResult;

/// Status every new order starts in
pub const STATUS_PENDING: &str = "pending";
/// Status that makes an order count toward revenue
pub const STATUS_COMPLETED: &str = "completed";

/// One line of an order: a product reference with quantity and the price
/// at purchase time (later catalog edits must not rewrite history).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

/// Placed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<OrderItem>,
    pub total: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Checkout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSave {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_id: i64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: i64,
    #[serde(default)]
    pub status: Option<String>,
}

impl Order {
    /// `items` travels as JSON text inside a single hash field; the decoded
    /// struct carries the structured form.
    pub(crate) fn to_fields(&self) -> RepoResult<Vec<(String, String)>> {
        Ok(vec![
            ("id".into(), self.id.to_string()),
            ("user_id".into(), self.user_id.to_string()),
            ("items".into(), fields::to_json("items", &self.items)?),
            ("total".into(), self.total.to_string()),
            ("status".into(), self.status.clone()),
            ("created_at".into(), self.created_at.to_string()),
            ("updated_at".into(), self.updated_at.to_string()),
        ])
    }

    pub(crate) fn from_fields(record: &FieldMap) -> RepoResult<Self> {
        Ok(Self {
            id: fields::req_i64(record, "id")?,
            user_id: fields::i64_or(record, "user_id", 0)?,
            items: fields::json_or_default(record, "items")?,
            total: fields::i64_or(record, "total", 0)?,
            status: fields::string(record, "status"),
            created_at: fields::i64_or(record, "created_at", 0)?,
            updated_at: fields::i64_or(record, "updated_at", 0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_survive_the_stored_form() {
        let order = Order {
            id: 12,
            user_id: 42,
            items: vec![
                OrderItem {
                    product_id: 1,
                    name: "Mango Liquid".into(),
                    price: 450,
                    quantity: 2,
                },
                OrderItem {
                    product_id: 4,
                    name: "Vaporesso XROS 3".into(),
                    price: 2800,
                    quantity: 1,
                },
            ],
            total: 3700,
            status: STATUS_PENDING.into(),
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        };
        let record: FieldMap = order.to_fields().unwrap().into_iter().collect();
        assert_eq!(Order::from_fields(&record).unwrap(), order);
    }

    #[test]
    fn missing_items_field_decodes_to_empty() {
        let record: FieldMap = [
            ("id".to_string(), "5".to_string()),
            ("status".to_string(), STATUS_PENDING.to_string()),
        ]
        .into();
        let order = Order::from_fields(&record).unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.total, 0);
    }
}
