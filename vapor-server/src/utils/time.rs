//! Time helpers
//!
//! All persisted timestamps are Unix epoch milliseconds (`i64`); the
//! repository layer never handles formatted dates.

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
