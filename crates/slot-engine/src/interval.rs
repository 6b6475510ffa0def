//! Time ranges and the small amount of arithmetic the reducers need on them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A time range `[start, end)` with `start <= end`.
///
/// Busy intervals come from the calendar provider; free intervals are produced
/// by [`crate::freebusy::invert_busy`]. Both use this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Build an interval, rejecting `start > end`.
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidInterval {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Whole minutes between start and end, truncated toward zero.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Minutes left after clipping the interval to `[lower, upper]`.
    ///
    /// Negative when the interval lies entirely outside the bound.
    pub fn clipped_minutes(&self, lower: DateTime<Utc>, upper: DateTime<Utc>) -> i64 {
        let start = self.start.max(lower);
        let end = self.end.min(upper);
        (end - start).num_minutes()
    }

    /// Start date in `tz` and the number of days from it to the end date.
    ///
    /// An interval ending exactly at midnight still counts the date it ends on.
    pub fn day_span(&self, tz: &Tz) -> (NaiveDate, u64) {
        let first = self.start.with_timezone(tz).date_naive();
        let last = self.end.with_timezone(tz).date_naive();
        (first, (last - first).num_days().max(0) as u64)
    }

    /// Civil dates touched by the interval in `tz`, start date to end date inclusive.
    pub fn dates_spanned(&self, tz: &Tz) -> impl Iterator<Item = NaiveDate> {
        let (first, span) = self.day_span(tz);
        first.iter_days().take(span as usize + 1)
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset, e.g. "2018-05-17T08:00:00+02:00") and naive
/// local time (e.g. "2018-05-17T08:00:00"), which is interpreted in `tz`.
pub fn parse_instant(value: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| SlotError::InvalidDatetime {
            value: value.to_string(),
            message: e.to_string(),
        })?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| SlotError::InvalidDatetime {
            value: value.to_string(),
            message: format!("local time does not exist in {}", tz.name()),
        })
}
