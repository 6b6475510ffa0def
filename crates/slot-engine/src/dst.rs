//! DST policies for resolving local opening times.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Policy for opening or closing times that fall in a DST gap
/// (e.g. 02:30 during spring forward).
///
/// Ambiguous times in the autumn overlap always resolve to the earlier instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DstPolicy {
    /// Move the wall-clock time forward by the length of the gap.
    #[default]
    ShiftForward,
    /// Treat the whole day as closed.
    Skip,
}

impl DstPolicy {
    /// Resolve a local datetime in `tz`, or `None` when the policy skips it.
    pub fn resolve(self, tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return Some(dt);
        }
        match self {
            DstPolicy::Skip => None,
            // Read the local time with the offset in force before the gap.
            DstPolicy::ShiftForward => {
                let before = tz
                    .from_local_datetime(&(local - Duration::hours(3)))
                    .earliest()?;
                let offset = before.offset().fix().local_minus_utc();
                let utc = local - Duration::seconds(i64::from(offset));
                Some(Utc.from_utc_datetime(&utc).with_timezone(tz))
            }
        }
    }
}
