//! End-to-end availability for one calendar.
//!
//! Busy intervals for a requested range go in; the free intervals, the
//! bookable days or the bookable slot starts come out. Everything here is
//! pure: fetching busy data and configuration happens before these run.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::CalendarConfig;
use crate::days;
use crate::freebusy;
use crate::interval::Interval;
use crate::slots::{self, Slot};

/// Which view of availability to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityMode {
    /// Dates with room for at least one booking.
    #[default]
    Days,
    /// Individual bookable start times.
    Slots,
}

/// Availability in either view, serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Availability {
    /// `YYYY-MM-DD` strings.
    Days(Vec<String>),
    Slots(Vec<Slot>),
}

/// Free intervals of `[range_start, range_end]` given ascending busy intervals.
pub fn free_intervals(
    busy: &[Interval],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<Interval> {
    let free = freebusy::invert_busy(busy, range_start, range_end);
    debug!(
        busy = busy.len(),
        free = free.len(),
        %range_start,
        %range_end,
        "Inverted busy intervals"
    );
    free
}

/// Dates in the range that can take at least one booking.
pub fn available_days(
    config: &CalendarConfig,
    busy: &[Interval],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<NaiveDate> {
    let free = free_intervals(busy, range_start, range_end);
    let days = days::free_days(&free, &config.hours(), config.step);
    debug!(days = days.len(), "Reduced free intervals to days");
    days
}

/// Bookable slot starts in the range.
pub fn available_slots(
    config: &CalendarConfig,
    busy: &[Interval],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<Slot> {
    let free = free_intervals(busy, range_start, range_end);
    let slots = slots::free_time_slots(&free, &config.hours(), config.step);
    debug!(slots = slots.len(), "Quantized free intervals to slots");
    slots
}

/// Compute availability in the requested view.
pub fn compute_availability(
    config: &CalendarConfig,
    busy: &[Interval],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    mode: AvailabilityMode,
) -> Availability {
    match mode {
        AvailabilityMode::Days => Availability::Days(days::format_days(&available_days(
            config,
            busy,
            range_start,
            range_end,
        ))),
        AvailabilityMode::Slots => {
            Availability::Slots(available_slots(config, busy, range_start, range_end))
        }
    }
}
