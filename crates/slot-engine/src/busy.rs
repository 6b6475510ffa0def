//! Read busy intervals from JSON.
//!
//! Two shapes are accepted: a bare array of `{start, end}` objects, or a
//! provider free/busy response keyed by calendar id:
//!
//! ```json
//! { "calendars": { "practice@example.com": { "busy": [ { "start": "...", "end": "..." } ] } } }
//! ```

use std::collections::HashMap;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{Result, SlotError};
use crate::interval::{parse_instant, Interval};

#[derive(Deserialize)]
struct BusyInput {
    start: String,
    end: String,
}

#[derive(Deserialize)]
struct CalendarBusy {
    #[serde(default)]
    busy: Vec<BusyInput>,
}

#[derive(Deserialize)]
struct FreeBusyResponse {
    calendars: HashMap<String, CalendarBusy>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BusyDocument {
    List(Vec<BusyInput>),
    Response(FreeBusyResponse),
}

/// Parse busy intervals from `json`, selecting `calendar_id` from a free/busy
/// response. Naive datetimes are read in `tz`.
///
/// The result keeps input order; callers must supply ascending,
/// non-overlapping intervals.
pub fn parse_busy_json(json: &str, calendar_id: &str, tz: &Tz) -> Result<Vec<Interval>> {
    let inputs = match serde_json::from_str::<BusyDocument>(json)? {
        BusyDocument::List(list) => list,
        BusyDocument::Response(mut response) => response
            .calendars
            .remove(calendar_id)
            .map(|calendar| calendar.busy)
            .ok_or_else(|| SlotError::MissingCalendar(calendar_id.to_string()))?,
    };

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_instant(&input.start, tz)?;
            let end = parse_instant(&input.end, tz)?;
            Interval::try_new(start, end)
        })
        .collect()
}
