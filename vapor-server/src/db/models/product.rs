//! Product Model

use serde::{Deserialize, Serialize};

use super::fields::{self, FieldMap};
use crate::db::repository::RepoResult;

/// Catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub stock: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload for create and update — an update supplies the target `id`,
/// a create leaves it out and gets one from the allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSave {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub stock: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

impl Product {
    pub(crate) fn to_fields(&self) -> Vec<(String, String)> {
        vec![
            ("id".into(), self.id.to_string()),
            ("name".into(), self.name.clone()),
            ("category".into(), self.category.clone()),
            ("price".into(), self.price.to_string()),
            ("stock".into(), self.stock.to_string()),
            ("description".into(), self.description.clone()),
            ("emoji".into(), self.emoji.clone()),
            ("created_at".into(), self.created_at.to_string()),
            ("updated_at".into(), self.updated_at.to_string()),
        ]
    }

    pub(crate) fn from_fields(record: &FieldMap) -> RepoResult<Self> {
        Ok(Self {
            id: fields::req_i64(record, "id")?,
            name: fields::string(record, "name"),
            category: fields::string(record, "category"),
            price: fields::i64_or(record, "price", 0)?,
            stock: fields::i64_or(record, "stock", 0)?,
            description: fields::string(record, "description"),
            emoji: fields::string(record, "emoji"),
            created_at: fields::i64_or(record, "created_at", 0)?,
            updated_at: fields::i64_or(record, "updated_at", 0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_codec_round_trips() {
        let product = Product {
            id: 3,
            name: "Mango Liquid".into(),
            category: "liquids".into(),
            price: 450,
            stock: 10,
            description: "Sweet mango flavour".into(),
            emoji: "🥭".into(),
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_100_000,
        };
        let record: FieldMap = product.to_fields().into_iter().collect();
        assert_eq!(Product::from_fields(&record).unwrap(), product);
    }

    #[test]
    fn decode_requires_an_id() {
        let record: FieldMap = [("name".to_string(), "Mango".to_string())].into();
        assert!(Product::from_fields(&record).is_err());
    }
}
