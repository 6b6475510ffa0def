//! Quantize free intervals into bookable start times.
//!
//! Each free interval is cut into back-to-back candidates of one step, starting
//! at the interval's own start. A candidate is kept when it lies inside the
//! opening window of the date being walked. The candidate count comes from the
//! unclipped interval length, so the grid phase follows the free interval, not
//! the opening time.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::hours::OpeningHours;
use crate::interval::Interval;
use crate::step::Step;

/// Wire format of a slot start.
pub const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A bookable start time, rendered in the calendar timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: DateTime<Tz>,
}

impl Slot {
    /// `YYYY-MM-DD HH:mm` in the calendar timezone.
    pub fn label(&self) -> String {
        self.start.format(SLOT_FORMAT).to_string()
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire {
            start: String,
        }
        Wire { start: self.label() }.serialize(serializer)
    }
}

/// Bookable slot starts for every free interval, in generation order.
pub fn free_time_slots(free: &[Interval], hours: &OpeningHours, step: Step) -> Vec<Slot> {
    let mut slots = Vec::new();

    for interval in free {
        let total = interval.duration_minutes();
        if total <= 0 {
            continue;
        }
        let candidates = (total / step.minutes()) as i32;

        let (first, span) = interval.day_span(&hours.timezone);
        for offset in 0..=span {
            let Some((open, closed)) = hours.window(first, offset).bounds() else {
                continue;
            };
            // Candidates ascend, so once one starts inside the window the run
            // ends at the first one that overshoots the close.
            slots.extend(
                grid(interval.start, step, candidates)
                    .skip_while(|(start, _)| *start < open)
                    .take_while(|(_, end)| *end <= closed)
                    .map(|(start, _)| Slot {
                        start: start.with_timezone(&hours.timezone),
                    }),
            );
        }
    }

    slots
}

/// `count` back-to-back `(start, end)` pairs of one step from `origin`.
fn grid(
    origin: DateTime<Utc>,
    step: Step,
    count: i32,
) -> impl Iterator<Item = (DateTime<Utc>, DateTime<Utc>)> {
    (0..count).map(move |j| {
        let start = origin + step.duration() * j;
        (start, start + step.duration())
    })
}
