//! Property-based tests for busy → free inversion using proptest.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use slot_engine::{invert_busy, Interval};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()
}

/// Ascending, non-overlapping busy intervals built from alternating
/// (gap, length) pairs in minutes. Zero gaps make touching intervals.
fn arb_busy() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((0i64..=240, 1i64..=180), 0..12).prop_map(|pairs| {
        let mut cursor = base();
        pairs
            .into_iter()
            .map(|(gap, len)| {
                let start = cursor + Duration::minutes(gap);
                let end = start + Duration::minutes(len);
                cursor = end;
                Interval { start, end }
            })
            .collect()
    })
}

/// A range inside (or slightly around) the first few days.
fn arb_range() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
    (0i64..=600, 1i64..=4000).prop_map(|(offset, len)| {
        let start = base() + Duration::minutes(offset);
        (start, start + Duration::minutes(len))
    })
}

proptest! {
    #[test]
    fn free_and_busy_tile_the_range((busy, (start, end)) in (arb_busy(), arb_range())) {
        let free = invert_busy(&busy, start, end);

        // Busy restricted to the range.
        let clipped: Vec<Interval> = busy
            .iter()
            .filter(|b| b.start < end && b.end > start)
            .map(|b| Interval { start: b.start.max(start), end: b.end.min(end) })
            .collect();

        let mut pieces: Vec<Interval> = free.iter().chain(clipped.iter()).copied().collect();
        pieces.sort();

        let mut cursor = start;
        for piece in &pieces {
            prop_assert_eq!(piece.start, cursor, "gap or overlap at {}", cursor);
            prop_assert!(piece.start < piece.end);
            cursor = piece.end;
        }
        prop_assert_eq!(cursor, end);
    }

    #[test]
    fn free_intervals_are_ascending_and_disjoint((busy, (start, end)) in (arb_busy(), arb_range())) {
        let free = invert_busy(&busy, start, end);
        for pair in free.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
        for f in &free {
            prop_assert!(f.start >= start && f.end <= end);
        }
    }

    #[test]
    fn inversion_is_deterministic((busy, (start, end)) in (arb_busy(), arb_range())) {
        prop_assert_eq!(invert_busy(&busy, start, end), invert_busy(&busy, start, end));
    }
}
