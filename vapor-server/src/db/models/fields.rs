//! Field-map codec helpers
//!
//! The store is schemaless: every record comes back as a string-to-string
//! map. All coercion (string to integer, JSON-in-a-field payloads) happens
//! here, so the per-entity codecs stay declarative and nothing parses
//! inline elsewhere.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::db::repository::{RepoError, RepoResult};

/// Raw record shape as read from the store
pub type FieldMap = HashMap<String, String>;

fn corrupt(name: &str, reason: impl std::fmt::Display) -> RepoError {
    RepoError::Store(format!("corrupt record: field '{name}' {reason}"))
}

/// Required integer field; a record without it is corrupt.
pub fn req_i64(fields: &FieldMap, name: &str) -> RepoResult<i64> {
    let raw = fields.get(name).ok_or_else(|| corrupt(name, "is missing"))?;
    raw.parse()
        .map_err(|_| corrupt(name, format!("is not an integer ('{raw}')")))
}

/// Integer field with a default for absence; present values must parse.
pub fn i64_or(fields: &FieldMap, name: &str, default: i64) -> RepoResult<i64> {
    match fields.get(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| corrupt(name, format!("is not an integer ('{raw}')"))),
        None => Ok(default),
    }
}

/// String field, empty when absent.
pub fn string(fields: &FieldMap, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

/// Structured payload stored as JSON text in one field;
/// `T::default()` when absent.
pub fn json_or_default<T>(fields: &FieldMap, name: &str) -> RepoResult<T>
where
    T: DeserializeOwned + Default,
{
    match fields.get(name) {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| corrupt(name, format!("is not valid JSON: {e}"))),
        None => Ok(T::default()),
    }
}

/// Serialize a structured payload into its stored JSON form.
pub fn to_json<T: Serialize>(name: &str, value: &T) -> RepoResult<String> {
    serde_json::to_string(value)
        .map_err(|e| RepoError::Store(format!("failed to serialize field '{name}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn coerces_stored_strings_to_integers() {
        let fields = record(&[("id", "7"), ("price", "450")]);
        assert_eq!(req_i64(&fields, "id").unwrap(), 7);
        assert_eq!(i64_or(&fields, "price", 0).unwrap(), 450);
        assert_eq!(i64_or(&fields, "stock", 0).unwrap(), 0);
    }

    #[test]
    fn rejects_non_numeric_values() {
        let fields = record(&[("id", "seven")]);
        assert!(matches!(
            req_i64(&fields, "id"),
            Err(RepoError::Store(_))
        ));
        assert!(i64_or(&fields, "id", 0).is_err());
    }

    #[test]
    fn json_payload_round_trips() {
        let encoded = to_json("referrals", &vec![3i64, 5]).unwrap();
        let fields = record(&[("referrals", encoded.as_str())]);
        let decoded: Vec<i64> = json_or_default(&fields, "referrals").unwrap();
        assert_eq!(decoded, vec![3, 5]);

        let empty: Vec<i64> = json_or_default(&record(&[]), "referrals").unwrap();
        assert!(empty.is_empty());
    }
}
