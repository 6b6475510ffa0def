//! Reduce free intervals to the calendar days that can take a booking.
//!
//! A day qualifies when some free interval, clipped to that day's opening
//! window, leaves at least one step of time.

use chrono::NaiveDate;

use crate::hours::OpeningHours;
use crate::interval::Interval;
use crate::step::Step;

/// Distinct dates with at least `step` of free time inside opening hours,
/// in the order they are first found while scanning `free` ascending.
pub fn free_days(free: &[Interval], hours: &OpeningHours, step: Step) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = Vec::new();

    for interval in free {
        let (first, span) = interval.day_span(&hours.timezone);
        for offset in 0..=span {
            let window = hours.window(first, offset);
            if days.contains(&window.date) {
                continue;
            }
            let Some((open, closed)) = window.bounds() else {
                continue;
            };
            if interval.clipped_minutes(open, closed) >= step.minutes() {
                days.push(window.date);
            }
        }
    }

    days
}

/// Format dates as `YYYY-MM-DD`.
pub fn format_days(days: &[NaiveDate]) -> Vec<String> {
    days.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect()
}
