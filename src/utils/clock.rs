//! Wall-clock helpers

use chrono::{Duration, Utc};

/// Current time as epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Epoch milliseconds `days` days from now
pub fn days_from_now_millis(days: i64) -> i64 {
    (Utc::now() + Duration::days(days)).timestamp_millis()
}
