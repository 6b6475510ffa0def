//! Booking granularity.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Grid size of bookable slots, also the shortest free time that makes a day
/// bookable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step(u32);

impl Step {
    pub const DEFAULT_MINUTES: u32 = 15;

    /// A step of `minutes`, or `None` for zero.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes > 0).then_some(Self(minutes))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Step length in minutes, widened for duration arithmetic.
    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    pub fn duration(self) -> Duration {
        Duration::minutes(self.minutes())
    }
}

impl Default for Step {
    fn default() -> Self {
        Self(Self::DEFAULT_MINUTES)
    }
}
