//! Calendar configuration document.
//!
//! The document names the calendar, its timezone and its weekly opening hours:
//!
//! ```json
//! {
//!   "calendar": { "timeZone": "Europe/Amsterdam", "id": "practice@example.com" },
//!   "openingHours": [
//!     { "open": null, "closed": null },
//!     { "open": "09:00", "closed": "17:00" },
//!     ...
//!   ]
//! }
//! ```
//!
//! `stepMinutes` (default 15) and `dstPolicy` (default `shift_forward`) are optional.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dst::DstPolicy;
use crate::error::{Result, SlotError};
use crate::hours::{OpeningHours, OpeningHoursTable, RawDayHours};
use crate::step::Step;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarSection {
    time_zone: String,
    id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    calendar: CalendarSection,
    opening_hours: Vec<RawDayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    step_minutes: Option<u32>,
    #[serde(default)]
    dst_policy: DstPolicy,
}

/// Validated calendar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigDocument", into = "ConfigDocument")]
pub struct CalendarConfig {
    pub calendar_id: String,
    pub timezone: Tz,
    pub opening_hours: OpeningHoursTable,
    pub step: Step,
    pub dst_policy: DstPolicy,
}

impl CalendarConfig {
    /// Parse and validate a configuration document.
    ///
    /// Malformed JSON is `SlotError::Config`; a well-formed document with bad
    /// values keeps its specific variant (`InvalidTimezone`, ...).
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: ConfigDocument = serde_json::from_str(json)?;
        Self::try_from(doc)
    }

    /// Opening hours bound to the configured timezone and DST policy.
    pub fn hours(&self) -> OpeningHours {
        OpeningHours::new(self.opening_hours, self.timezone).with_dst_policy(self.dst_policy)
    }
}

/// Parse an IANA timezone identifier.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
}

impl TryFrom<ConfigDocument> for CalendarConfig {
    type Error = SlotError;

    fn try_from(doc: ConfigDocument) -> Result<Self> {
        let step = match doc.step_minutes {
            None => Step::default(),
            Some(minutes) => {
                Step::from_minutes(minutes).ok_or(SlotError::InvalidStep(minutes))?
            }
        };
        Ok(Self {
            calendar_id: doc.calendar.id,
            timezone: parse_timezone(&doc.calendar.time_zone)?,
            opening_hours: OpeningHoursTable::from_raw(&doc.opening_hours)?,
            step,
            dst_policy: doc.dst_policy,
        })
    }
}

impl From<CalendarConfig> for ConfigDocument {
    fn from(config: CalendarConfig) -> Self {
        Self {
            calendar: CalendarSection {
                time_zone: config.timezone.name().to_string(),
                id: config.calendar_id,
            },
            opening_hours: config.opening_hours.to_raw(),
            step_minutes: Some(config.step.get()),
            dst_policy: config.dst_policy,
        }
    }
}
