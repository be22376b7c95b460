//! Interval names used in the E part of regular time-series pathnames
//!
//! The table is ordered from the longest to the shortest interval and ends with
//! the `0Second` irregular marker. Names are matched case-insensitively; a leading
//! `~` marks a pseudo-regular interval and is carried through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DssError, Result};

/// Prefix marking a pseudo-regular interval
pub const PSEUDO_REGULAR_PREFIX: char = '~';

/// Seconds in one week, the longest fixed-duration interval
pub const SECONDS_PER_WEEK: i64 = 604_800;
/// Nominal seconds of `1Year`
pub const SECONDS_PER_YEAR: i64 = 31_536_000;
/// Nominal seconds of `1Month`
pub const SECONDS_PER_MONTH: i64 = 2_592_000;
/// Nominal seconds of `Semi-Month`
pub const SECONDS_PER_SEMI_MONTH: i64 = 1_296_000;
/// Nominal seconds of `Tri-Month`
pub const SECONDS_PER_TRI_MONTH: i64 = 864_000;

/// Canonical interval names and their length in seconds
pub const INTERVALS: [(&str, i64); 35] = [
    ("1Year", SECONDS_PER_YEAR),
    ("1Month", SECONDS_PER_MONTH),
    ("Semi-Month", SECONDS_PER_SEMI_MONTH),
    ("Tri-Month", SECONDS_PER_TRI_MONTH),
    ("1Week", SECONDS_PER_WEEK),
    ("1Day", 86_400),
    ("12Hour", 43_200),
    ("8Hour", 28_800),
    ("6Hour", 21_600),
    ("4Hour", 14_400),
    ("3Hour", 10_800),
    ("2Hour", 7_200),
    ("1Hour", 3_600),
    ("30Minute", 1_800),
    ("20Minute", 1_200),
    ("15Minute", 900),
    ("12Minute", 720),
    ("10Minute", 600),
    ("6Minute", 360),
    ("5Minute", 300),
    ("4Minute", 240),
    ("3Minute", 180),
    ("2Minute", 120),
    ("1Minute", 60),
    ("30Second", 30),
    ("20Second", 20),
    ("15Second", 15),
    ("10Second", 10),
    ("6Second", 6),
    ("5Second", 5),
    ("4Second", 4),
    ("3Second", 3),
    ("2Second", 2),
    ("1Second", 1),
    ("0Second", 0),
];

/// Block lengths of irregular series; all carry no fixed interval
pub const IRREGULAR_BLOCKS: [&str; 5] = ["IR-Day", "IR-Month", "IR-Year", "IR-Decade", "IR-Century"];

/// Split off the pseudo-regular marker
fn split_pseudo(name: &str) -> (bool, &str) {
    let name = name.trim();
    match name.strip_prefix(PSEUDO_REGULAR_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, name),
    }
}

/// Find the canonical table entry for a name without the `~` marker
fn lookup_name(name: &str) -> Option<(&'static str, i64)> {
    INTERVALS
        .iter()
        .copied()
        .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
        .or_else(|| {
            IRREGULAR_BLOCKS
                .iter()
                .find(|block| block.eq_ignore_ascii_case(name))
                .map(|block| (*block, 0))
        })
}

/// Convert an interval name such as `1Hour` or `~1Day` to seconds
pub fn interval_to_seconds(name: &str) -> Result<i64> {
    let (_, bare) = split_pseudo(name);
    lookup_name(bare)
        .map(|(_, seconds)| seconds)
        .ok_or_else(|| DssError::UnknownInterval(name.to_string()))
}

/// Convert seconds back to the canonical interval name
pub fn seconds_to_interval(seconds: i64) -> Result<&'static str> {
    INTERVALS
        .iter()
        .find(|(_, s)| *s == seconds)
        .map(|(name, _)| *name)
        .ok_or_else(|| DssError::UnknownInterval(format!("{seconds} seconds")))
}

/// Whether an interval name carries the pseudo-regular marker
#[must_use]
pub fn is_pseudo_regular(name: &str) -> bool {
    split_pseudo(name).0
}

/// A named interval from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Interval {
    name: &'static str,
    seconds: i64,
    pseudo_regular: bool,
}

impl Interval {
    /// Interval for a length in seconds
    pub fn from_seconds(seconds: i64) -> Result<Self> {
        let name = seconds_to_interval(seconds)?;
        Ok(Self {
            name,
            seconds,
            pseudo_regular: false,
        })
    }

    /// Same interval with the pseudo-regular marker set or cleared
    #[must_use]
    pub const fn with_pseudo_regular(mut self, pseudo_regular: bool) -> Self {
        self.pseudo_regular = pseudo_regular;
        self
    }

    /// Length in seconds
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Canonical name without the `~` marker
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the interval is pseudo-regular
    #[must_use]
    pub const fn is_pseudo_regular(&self) -> bool {
        self.pseudo_regular
    }

    /// Whether this is the irregular marker or an irregular block length
    #[must_use]
    pub const fn is_irregular(&self) -> bool {
        self.seconds == 0
    }
}

impl FromStr for Interval {
    type Err = DssError;

    fn from_str(s: &str) -> Result<Self> {
        let (pseudo_regular, bare) = split_pseudo(s);
        let (name, seconds) =
            lookup_name(bare).ok_or_else(|| DssError::UnknownInterval(s.to_string()))?;
        Ok(Self {
            name,
            seconds,
            pseudo_regular,
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pseudo_regular {
            write!(f, "{PSEUDO_REGULAR_PREFIX}")?;
        }
        f.write_str(self.name)
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}

impl TryFrom<String> for Interval {
    type Error = DssError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// How timestamps advance for a given interval length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalSpec {
    /// Fixed duration of at most one week
    Fixed(i64),
    /// One calendar month
    Month,
    /// One calendar year
    Year,
    /// Twice a month
    SemiMonth,
    /// Three times a month
    TriMonth,
}

impl IntervalSpec {
    /// Classify an interval length in seconds
    pub fn from_seconds(seconds: i64) -> Result<Self> {
        match seconds {
            SECONDS_PER_YEAR => Ok(Self::Year),
            SECONDS_PER_MONTH => Ok(Self::Month),
            SECONDS_PER_SEMI_MONTH => Ok(Self::SemiMonth),
            SECONDS_PER_TRI_MONTH => Ok(Self::TriMonth),
            1..=SECONDS_PER_WEEK => Ok(Self::Fixed(seconds)),
            0 => Err(DssError::NotSupported(
                "an irregular (0 second) interval has no time step".to_string(),
            )),
            other => Err(DssError::NotSupported(format!(
                "no calendar unit for an interval of {other} seconds"
            ))),
        }
    }
}
