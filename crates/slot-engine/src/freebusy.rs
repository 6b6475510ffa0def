//! Invert busy intervals into free intervals.
//!
//! Walks the busy list with a cursor and emits the gaps between busy periods
//! within a bounding range. The busy list must already be ascending and
//! non-overlapping, which is what a provider free/busy query returns.

use chrono::{DateTime, Utc};

use crate::interval::Interval;

/// Compute the free intervals of `[range_start, range_end]` not covered by `busy`.
///
/// `busy` must be sorted by start and pairwise non-overlapping; this is not
/// checked, and violating it gives unspecified (but non-panicking) output.
/// Touching busy intervals never produce a zero-length free interval, and gaps
/// are clipped to the range.
pub fn invert_busy(
    busy: &[Interval],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<Interval> {
    let mut free = Vec::new();
    if range_start >= range_end {
        return free;
    }

    let mut cursor = range_start;
    for period in busy {
        if cursor >= range_end {
            break;
        }
        let gap_end = period.start.min(range_end);
        if cursor < gap_end {
            free.push(Interval {
                start: cursor,
                end: gap_end,
            });
        }
        cursor = cursor.max(period.end);
    }

    // Trailing free interval after the last busy period.
    if cursor < range_end {
        free.push(Interval {
            start: cursor,
            end: range_end,
        });
    }

    free
}
