//! Conversion between the store's integer time encoding and calendar instants
//!
//! The store counts days from a fixed epoch, 31Dec1899, so that day 1 is
//! 01Jan1900. A time value is a number of granularity units added to a base day.
//! All values handed to or received from the store are 32-bit integers.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{DssError, Result};
use crate::time::date_block::{DATE_FORMAT, format_date, parse_date_block};
use crate::time::granularity::{Granularity, SECONDS_PER_DAY};

/// Day zero of the store's day numbering
pub const STORE_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 31) {
    Some(date) => date,
    None => panic!("invalid store epoch"),
};

/// Reference date for the julian base date of irregular series
pub const JULIAN_REFERENCE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid julian reference"),
};

/// Time token used for midnight at the end of a day
pub const END_OF_DAY: &str = "24:00";

/// One encoded instant: whole days from the base plus units since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalEncoding {
    /// Whole days after the base day
    pub day_offset: i32,
    /// Granularity units since midnight of that day
    pub unit_count: i64,
    /// Unit size
    pub granularity: Granularity,
}

/// Encoded instants sharing one base day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTimes {
    /// Base day, counted from the store epoch
    pub base_day_offset: i32,
    /// One encoding per instant
    pub encodings: Vec<TemporalEncoding>,
}

impl EncodedTimes {
    /// Flatten to the single unit counts the store expects in its time arrays
    pub fn to_unit_counts(&self) -> Result<Vec<i32>> {
        self.encodings
            .iter()
            .map(|encoding| {
                let granularity = encoding.granularity;
                let units = i64::from(encoding.day_offset) * granularity.units_per_day()
                    + encoding.unit_count;
                fit_i32(units, granularity)
            })
            .collect()
    }
}

fn fit_i32(value: i64, granularity: Granularity) -> Result<i32> {
    i32::try_from(value).map_err(|_| DssError::EncodingOverflow {
        value,
        granularity_seconds: granularity.seconds(),
    })
}

fn store_midnight() -> NaiveDateTime {
    STORE_EPOCH.and_time(NaiveTime::MIN)
}

/// Convert one encoded instant to a calendar timestamp
///
/// instant = epoch + (base_day_offset + day_offset) days + unit_count * granularity seconds
pub fn to_calendar(
    day_offset: i32,
    unit_count: i64,
    granularity_seconds: i64,
    base_day_offset: i32,
) -> Result<NaiveDateTime> {
    let granularity = Granularity::from_seconds(granularity_seconds)?;
    let days = i64::from(base_day_offset) + i64::from(day_offset);
    let seconds = unit_count
        .checked_mul(granularity.seconds())
        .and_then(|s| days.checked_mul(SECONDS_PER_DAY)?.checked_add(s));

    seconds
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| store_midnight().checked_add_signed(delta))
        .ok_or_else(|| {
            DssError::InvalidDate(format!(
                "day {day_offset} + {unit_count} units after base day {base_day_offset} is out of range"
            ))
        })
}

/// Decode a time array from a retrieval, each element a unit count from the base day
pub fn times_from_encoded(
    times: &[i32],
    granularity_seconds: i64,
    base_day_offset: i32,
) -> Result<Vec<NaiveDateTime>> {
    times
        .iter()
        .map(|&t| to_calendar(0, i64::from(t), granularity_seconds, base_day_offset))
        .collect()
}

/// Day number of a date in the store's numbering
#[must_use]
pub fn store_day_number(date: NaiveDate) -> i64 {
    (date - STORE_EPOCH).num_days()
}

/// Encode instants relative to the midnight of `base`
///
/// Anything finer than the granularity is truncated. Fails with
/// `EncodingOverflow` when a day offset does not fit 32 bits.
pub fn from_calendar(
    instants: &[NaiveDateTime],
    granularity_seconds: i64,
    base: NaiveDateTime,
) -> Result<EncodedTimes> {
    let granularity = Granularity::from_seconds(granularity_seconds)?;
    let base_midnight = base.date().and_time(NaiveTime::MIN);
    let base_day_offset = fit_i32(store_day_number(base.date()), Granularity::Day)?;

    let encodings = instants
        .iter()
        .map(|instant| {
            let seconds = (*instant - base_midnight).num_seconds();
            let day_offset = fit_i32(seconds.div_euclid(SECONDS_PER_DAY), granularity)?;
            let unit_count = seconds.rem_euclid(SECONDS_PER_DAY) / granularity.seconds();
            Ok(TemporalEncoding {
                day_offset,
                unit_count,
                granularity,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(EncodedTimes {
        base_day_offset,
        encodings,
    })
}

/// Format an instant as the store's (date, time) tokens
///
/// Midnight is written as `24:00` of the previous day.
#[must_use]
pub fn encode_boundary_time(instant: NaiveDateTime) -> (String, String) {
    if instant.time() == NaiveTime::MIN {
        let previous = instant.date().pred_opt().unwrap_or(instant.date());
        (format_date(previous), END_OF_DAY.to_string())
    } else {
        (format_date(instant.date()), instant.format("%H:%M").to_string())
    }
}

/// Parse the store's (date, time) tokens back into an instant
///
/// `24:00` is midnight at the start of the following day.
pub fn decode_boundary_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let day = parse_date_block(date).ok_or_else(|| {
        DssError::InvalidDate(format!("'{date}' does not match {DATE_FORMAT}"))
    })?;
    let time = time.trim();

    if time == END_OF_DAY {
        return day
            .succ_opt()
            .map(|next| next.and_time(NaiveTime::MIN))
            .ok_or_else(|| DssError::InvalidDate(format!("no day after {date}")));
    }

    ["%H:%M", "%H%M", "%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
        .map(|t| day.and_time(t))
        .ok_or_else(|| DssError::InvalidDate(format!("'{time}' is not a time of day")))
}

/// Whole days from 01Jan1900 to the date of `first`
#[must_use]
pub fn julian_base_date(first: NaiveDateTime) -> i32 {
    let days = (first.date() - JULIAN_REFERENCE).num_days();
    i32::try_from(days).unwrap_or(if days < 0 { i32::MIN } else { i32::MAX })
}
