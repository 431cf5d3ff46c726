//! Server configuration
//!
//! All settings load from environment variables with sane defaults.
//!
//! | Env var | Default | Meaning |
//! |-------------|--------------------------|----------------------------------|
//! | REDIS_URL   | redis://127.0.0.1:6379   | Key-value store connection URL   |
//! | PORT        | 5000                     | HTTP API port                    |
//! | ADMIN_IDS   | (empty)                  | Comma-separated admin user ids   |
//! | ENVIRONMENT | development              | development \| staging \| production |
//! | LOG_LEVEL   | info                     | Default tracing filter           |
//! | LOG_DIR     | (none)                   | Daily log files when set         |

use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct Config {
    /// Key-value store connection URL
    pub redis_url: String,
    /// HTTP API port
    pub http_port: u16,
    /// User ids with admin rights — the only authorization in the system
    pub admin_ids: Vec<i64>,
    /// Runtime environment name
    pub environment: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Optional directory for daily-rotated log files
    pub log_dir: Option<String>,
}

/// Parse the ADMIN_IDS list; malformed entries are skipped.
fn parse_admin_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            admin_ids: std::env::var("ADMIN_IDS")
                .map(|raw| parse_admin_ids(&raw))
                .unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Admin allow-list as a set, for injection into the user repository.
    pub fn admin_set(&self) -> HashSet<i64> {
        self.admin_ids.iter().copied().collect()
    }
}
