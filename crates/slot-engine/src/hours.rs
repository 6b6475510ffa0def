//! Weekly opening hours and their resolution to concrete instants.
//!
//! The table is stored as seven weekday entries, Sunday first, each either
//! closed or an `open`/`closed` pair of wall-clock times. [`OpeningHours`]
//! combines the table with a timezone and resolves a civil date to a
//! [`DayWindow`].

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dst::DstPolicy;
use crate::error::{Result, SlotError};

/// One weekday entry as it appears in the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDayHours {
    pub open: Option<String>,
    pub closed: Option<String>,
}

/// Opening hours of one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayHours {
    Closed,
    Open { open: NaiveTime, closed: NaiveTime },
}

impl DayHours {
    fn from_raw(weekday: usize, raw: &RawDayHours) -> Result<Self> {
        match (raw.open.as_deref(), raw.closed.as_deref()) {
            (None, None) => Ok(DayHours::Closed),
            (Some(open), Some(closed)) => Ok(DayHours::Open {
                open: parse_hhmm(weekday, open)?,
                closed: parse_hhmm(weekday, closed)?,
            }),
            _ => Err(SlotError::InvalidOpeningHours {
                weekday,
                message: "open and closed must both be set or both be null".to_string(),
            }),
        }
    }

    fn to_raw(self) -> RawDayHours {
        match self {
            DayHours::Closed => RawDayHours::default(),
            DayHours::Open { open, closed } => RawDayHours {
                open: Some(open.format("%H:%M").to_string()),
                closed: Some(closed.format("%H:%M").to_string()),
            },
        }
    }
}

fn parse_hhmm(weekday: usize, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| SlotError::InvalidOpeningHours {
        weekday,
        message: format!("'{}' is not HH:MM ({})", value, e),
    })
}

/// Seven weekday entries indexed by `num_days_from_sunday()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHoursTable {
    days: [DayHours; 7],
}

impl OpeningHoursTable {
    pub fn new(days: [DayHours; 7]) -> Self {
        Self { days }
    }

    /// Build the table from configuration entries, Sunday first.
    ///
    /// # Errors
    /// `InvalidOpeningHoursLength` unless there are exactly 7 entries;
    /// `InvalidOpeningHours` for a malformed time or a half-null entry.
    pub fn from_raw(entries: &[RawDayHours]) -> Result<Self> {
        if entries.len() != 7 {
            return Err(SlotError::InvalidOpeningHoursLength(entries.len()));
        }
        let mut days = [DayHours::Closed; 7];
        for (weekday, raw) in entries.iter().enumerate() {
            days[weekday] = DayHours::from_raw(weekday, raw)?;
        }
        Ok(Self { days })
    }

    pub fn to_raw(&self) -> Vec<RawDayHours> {
        self.days.iter().map(|d| d.to_raw()).collect()
    }

    /// Entry for the weekday of `date`.
    pub fn for_date(&self, date: NaiveDate) -> DayHours {
        self.days[date.weekday().num_days_from_sunday() as usize]
    }
}

impl Serialize for OpeningHoursTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OpeningHoursTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Vec::<RawDayHours>::deserialize(deserializer)?;
        Self::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}

/// Resolved opening hours for one concrete date. Both bounds are `None` when
/// the date is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub open: Option<DateTime<Utc>>,
    pub closed: Option<DateTime<Utc>>,
}

impl DayWindow {
    fn closed_on(date: NaiveDate) -> Self {
        Self {
            date,
            open: None,
            closed: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.bounds().is_none()
    }

    /// `(open, closed)` when the date is open.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.open.zip(self.closed)
    }
}

/// Opening-hours table bound to a timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningHours {
    pub table: OpeningHoursTable,
    pub timezone: Tz,
    pub dst_policy: DstPolicy,
}

impl OpeningHours {
    pub fn new(table: OpeningHoursTable, timezone: Tz) -> Self {
        Self {
            table,
            timezone,
            dst_policy: DstPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_dst_policy(mut self, dst_policy: DstPolicy) -> Self {
        self.dst_policy = dst_policy;
        self
    }

    /// Resolve the opening window of `date + offset` days.
    ///
    /// The offset walks forward through the dates of a multi-day free interval.
    pub fn window(&self, date: NaiveDate, offset: u64) -> DayWindow {
        let Some(day) = date.checked_add_days(Days::new(offset)) else {
            return DayWindow::closed_on(date);
        };

        let DayHours::Open { open, closed } = self.table.for_date(day) else {
            return DayWindow::closed_on(day);
        };

        let resolve = |time: NaiveTime| {
            self.dst_policy
                .resolve(&self.timezone, day.and_time(time))
                .map(|dt| dt.with_timezone(&Utc))
        };
        match (resolve(open), resolve(closed)) {
            (Some(open), Some(closed)) => DayWindow {
                date: day,
                open: Some(open),
                closed: Some(closed),
            },
            _ => DayWindow::closed_on(day),
        }
    }
}
