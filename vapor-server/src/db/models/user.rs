//! User Model
//!
//! User ids come from the messaging platform, never from the allocator.
//! `is_admin` is derived from the injected admin allow-list on every read;
//! a stored value is never trusted and never written.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::fields::{self, FieldMap};
use crate::db::repository::RepoResult;

/// Shop customer profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    pub bonus: i64,
    /// Set semantics, order irrelevant; stored as a JSON array.
    #[serde(default)]
    pub referrals: Vec<i64>,
    pub referral_code: String,
    pub is_admin: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Full overwrite of the non-derived profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSave {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bonus: i64,
    #[serde(default)]
    pub referrals: Vec<i64>,
    #[serde(default)]
    pub referral_code: Option<String>,
}

impl User {
    /// Deterministic default referral code for a fresh profile.
    pub fn default_referral_code(id: i64) -> String {
        format!("ref_{id}")
    }

    pub(crate) fn to_fields(&self) -> RepoResult<Vec<(String, String)>> {
        // is_admin intentionally not persisted
        Ok(vec![
            ("id".into(), self.id.to_string()),
            ("username".into(), self.username.clone()),
            ("bonus".into(), self.bonus.to_string()),
            (
                "referrals".into(),
                fields::to_json("referrals", &self.referrals)?,
            ),
            ("referral_code".into(), self.referral_code.clone()),
            ("created_at".into(), self.created_at.to_string()),
            ("updated_at".into(), self.updated_at.to_string()),
        ])
    }

    pub(crate) fn from_fields(record: &FieldMap, admins: &HashSet<i64>) -> RepoResult<Self> {
        let id = fields::req_i64(record, "id")?;
        Ok(Self {
            id,
            username: fields::string(record, "username"),
            bonus: fields::i64_or(record, "bonus", 0)?,
            referrals: fields::json_or_default(record, "referrals")?,
            referral_code: fields::string(record, "referral_code"),
            is_admin: admins.contains(&id),
            created_at: fields::i64_or(record, "created_at", 0)?,
            updated_at: fields::i64_or(record, "updated_at", 0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referral_code_is_deterministic() {
        assert_eq!(User::default_referral_code(42), "ref_42");
        assert_eq!(User::default_referral_code(42), User::default_referral_code(42));
    }

    #[test]
    fn admin_flag_comes_from_the_allow_list_not_the_record() {
        let record: FieldMap = [
            ("id".to_string(), "7".to_string()),
            ("is_admin".to_string(), "true".to_string()),
        ]
        .into();

        let nobody = HashSet::new();
        let user = User::from_fields(&record, &nobody).unwrap();
        assert!(!user.is_admin);

        let admins: HashSet<i64> = [7].into();
        let user = User::from_fields(&record, &admins).unwrap();
        assert!(user.is_admin);
    }

    #[test]
    fn referrals_round_trip() {
        let user = User {
            id: 42,
            username: "amber".into(),
            bonus: 150,
            referrals: vec![43, 44],
            referral_code: User::default_referral_code(42),
            is_admin: false,
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        };
        let record: FieldMap = user.to_fields().unwrap().into_iter().collect();
        let decoded = User::from_fields(&record, &HashSet::new()).unwrap();
        assert_eq!(decoded, user);
    }
}
