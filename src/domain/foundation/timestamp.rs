//! Timestamp value object for immutable points in time.
//!
//! Month arithmetic follows calendar rollover: when the day of month does
//! not exist in the target month, the surplus days spill into the next
//! month (Jan 31 + 1 month is Mar 2 in a leap year). Nothing is clamped.

use chrono::{DateTime, Datelike, Duration, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp at midnight UTC of the given calendar date.
    ///
    /// Returns `None` for dates that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }

    /// Parses an ISO 8601 instant or a bare `YYYY-MM-DD` date.
    ///
    /// Bare dates resolve to midnight UTC.
    pub fn parse_iso(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(naive.and_utc()));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| {
                ValidationError::invalid_format("valid_from", format!("'{}' is not an ISO date", value))
            })
    }

    /// Formats as RFC 3339 with millisecond precision and a `Z` suffix.
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Adds whole days, returning `None` past the representable range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    /// Adds calendar months with rollover, preserving the time of day.
    ///
    /// Returns `None` past the representable range.
    pub fn checked_add_calendar_months(&self, months: u32) -> Option<Self> {
        let month_index = i64::from(self.0.year()) * 12 + i64::from(self.0.month0()) + i64::from(months);
        let year = i32::try_from(month_index.div_euclid(12)).ok()?;
        let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;

        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        let date = first_of_month.checked_add_signed(Duration::days(i64::from(self.0.day0())))?;
        Some(Self(date.and_time(self.0.time()).and_utc()))
    }
}
