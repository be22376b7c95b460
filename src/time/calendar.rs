//! Calendar arithmetic for month and year stepping
//!
//! Monthly and yearly series advance by calendar units rather than by a fixed
//! number of seconds. Each step is taken from the series start, so a day that
//! had to be clamped in a short month comes back once the month is long enough
//! (31Jan, 29Feb, 31Mar, ...).

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::{DssError, Result};
use crate::time::interval::IntervalSpec;

/// Whether `year` is a Gregorian leap year
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-12)
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Clamp a day-of-month to the last valid day of the target month
#[must_use]
pub const fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let last = days_in_month(year, month);
    if day > last { last } else { day }
}

/// Move `start` by a number of calendar months, keeping the time of day
#[must_use]
pub fn add_months(start: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    let total = start.year().checked_mul(12)?.checked_add(start.month0() as i32)?;
    let total = total.checked_add(months)?;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = clamp_day(year, month, start.day());
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(start.time()))
}

/// Move `start` by a number of calendar years, keeping the time of day
#[must_use]
pub fn add_years(start: NaiveDateTime, years: i32) -> Option<NaiveDateTime> {
    add_months(start, years.checked_mul(12)?)
}

/// Generate `count` timestamps starting at `start`, `interval_seconds` apart
///
/// Intervals up to one week are added as fixed durations. One month and one year
/// step by calendar units. Semi-month and tri-month are recognized but not
/// implemented.
pub fn generate_times(
    start: NaiveDateTime,
    count: usize,
    interval_seconds: i64,
) -> Result<Vec<NaiveDateTime>> {
    let spec = IntervalSpec::from_seconds(interval_seconds)?;
    if matches!(spec, IntervalSpec::SemiMonth | IntervalSpec::TriMonth) {
        return Err(DssError::NotSupported(format!(
            "time generation for {spec:?} intervals"
        )));
    }
    let out_of_range = |i: usize| {
        DssError::InvalidDate(format!(
            "timestamp {i} of a series starting {start} is out of range"
        ))
    };

    (0..count)
        .map(|i| {
            let step = i32::try_from(i).map_err(|_| out_of_range(i))?;
            let next = match spec {
                IntervalSpec::Fixed(seconds) => TimeDelta::try_seconds(seconds * i64::from(step))
                    .and_then(|delta| start.checked_add_signed(delta)),
                IntervalSpec::Month => add_months(start, step),
                IntervalSpec::Year => add_years(start, step),
                // rejected above
                IntervalSpec::SemiMonth | IntervalSpec::TriMonth => None,
            };
            next.ok_or_else(|| out_of_range(i))
        })
        .collect()
}
