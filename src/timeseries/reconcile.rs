//! Interval reconciliation for regular series
//!
//! A regular series can state its interval three ways: an explicit interval, the
//! E part of its path, and the step between its first two timestamps. Whatever
//! sources are present must agree.

use chrono::NaiveDateTime;
use itertools::Itertools;

use crate::error::{DssError, Result};
use crate::time::calendar::{add_months, add_years};
use crate::time::interval::{SECONDS_PER_MONTH, SECONDS_PER_YEAR};

/// Reduce the present interval sources to one value
///
/// Returns `Ok(None)` when no source is present.
pub fn reconcile_interval(sources: &[Option<i64>]) -> Result<Option<i64>> {
    let present: Vec<i64> = sources.iter().flatten().copied().collect();
    match present.iter().all_equal_value() {
        Ok(seconds) => Ok(Some(*seconds)),
        Err(None) => Ok(None),
        Err(Some(_)) => Err(DssError::InconsistentInterval(
            present.iter().map(|s| format!("{s}s")).join(" vs "),
        )),
    }
}

/// Interval implied by two consecutive timestamps
///
/// A step of exactly one calendar month or year maps to the nominal seconds of
/// `1Month` or `1Year`, so a monthly series starting on the 31st still agrees
/// with its E part.
#[must_use]
pub fn inferred_interval(first: NaiveDateTime, second: NaiveDateTime) -> i64 {
    if add_months(first, 1) == Some(second) {
        SECONDS_PER_MONTH
    } else if add_years(first, 1) == Some(second) {
        SECONDS_PER_YEAR
    } else {
        (second - first).num_seconds()
    }
}
