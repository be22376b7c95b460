//! Unit size used by the store to encode intra-day offsets

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{DssError, Result};

/// Seconds in one day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Granularity of an encoded time value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Granularity {
    /// One second
    Second,
    /// One minute
    Minute,
    /// One hour
    Hour,
    /// One day
    Day,
}

impl Granularity {
    /// Length of one unit in seconds
    #[must_use]
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 3_600,
            Self::Day => SECONDS_PER_DAY,
        }
    }

    /// Number of units in one day
    #[must_use]
    pub const fn units_per_day(self) -> i64 {
        SECONDS_PER_DAY / self.seconds()
    }

    /// Whether `instant` falls on a whole unit, ignoring fractions of a second
    #[must_use]
    pub fn represents(self, instant: NaiveDateTime) -> bool {
        i64::from(instant.num_seconds_from_midnight()) % self.seconds() == 0
    }

    /// Look up a granularity by its length in seconds
    pub fn from_seconds(seconds: i64) -> Result<Self> {
        match seconds {
            1 => Ok(Self::Second),
            60 => Ok(Self::Minute),
            3_600 => Ok(Self::Hour),
            SECONDS_PER_DAY => Ok(Self::Day),
            other => Err(DssError::UnsupportedGranularity(other)),
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Self::Minute
    }
}

impl TryFrom<i64> for Granularity {
    type Error = DssError;

    fn try_from(seconds: i64) -> Result<Self> {
        Self::from_seconds(seconds)
    }
}
