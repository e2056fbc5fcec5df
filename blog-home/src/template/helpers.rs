//! Template helper functions for the home page
//!
//! A wrapper for trusted pre-rendered HTML and the two timestamp formats
//! shown next to entries. Everything else is escaped by askama.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// HTML Safe Output
// =============================================================================

/// HTML-safe string wrapper
///
/// Marks a string as safe for direct HTML output (already rendered or escaped).
/// Ledes and copy fragments arrive in this form and are never escaped again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafeString(pub String);

impl SafeString {
    /// Create a new `SafeString`
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Borrow the underlying markup
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SafeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SafeString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SafeString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// =============================================================================
// Timestamps
// =============================================================================

/// Machine-readable timestamp for `<time datetime="...">`
///
/// ```rust
/// use blog_home::template::helpers::iso_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
/// assert_eq!(iso_timestamp(&at), "2024-03-01T09:30:00Z");
/// ```
#[must_use]
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Absolute, human-friendly date such as `March 1, 2024`
#[must_use]
pub fn absolute_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Human-friendly timestamp relative to `now`
///
/// Timestamps less than `window_days` old read as "just now", "5 minutes ago",
/// "2 hours ago" or "3 days ago". Older timestamps, and timestamps in the
/// future, fall back to [`absolute_date`]. A window too large to represent
/// as a duration never expires.
#[must_use]
pub fn human_timestamp(at: &DateTime<Utc>, now: &DateTime<Utc>, window_days: i64) -> String {
    let age = now.signed_duration_since(*at);
    let expired = Duration::try_days(window_days).is_some_and(|window| age >= window);
    if age < Duration::zero() || expired {
        return absolute_date(at);
    }

    if age < Duration::minutes(1) {
        "just now".to_string()
    } else if age < Duration::hours(1) {
        ago(age.num_minutes(), "minute")
    } else if age < Duration::days(1) {
        ago(age.num_hours(), "hour")
    } else {
        ago(age.num_days(), "day")
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
