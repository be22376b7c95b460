//! Module for handling the store's date tokens.
//!
//! Dates appear in pathnames and store calls as `DDMmmYYYY` (for example
//! `01Jan1990`). A condensed catalog entry carries either one such date or a
//! `"first - last"` range.

use chrono::NaiveDate;

use crate::error::{DssError, Result};

/// `chrono` format of a date token
pub const DATE_FORMAT: &str = "%d%b%Y";

/// Separator between the first and last date of a condensed date block
pub const RANGE_SEPARATOR: &str = " - ";

/// Check the `DDMmmYYYY` shape before handing the token to `chrono`
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 9
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[2..5].iter().all(u8::is_ascii_alphabetic)
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// Parse a single `DDMmmYYYY` date block
///
/// Returns `None` for anything that is not exactly one date (ranges, empty
/// parts, other layouts).
#[must_use]
pub fn parse_date_block(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !has_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Format a date as a `DDMmmYYYY` token
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a condensed date block from ascending first and last dates
#[must_use]
pub fn format_date_range(first: NaiveDate, last: NaiveDate) -> String {
    if first == last {
        format_date(first)
    } else {
        format!("{}{RANGE_SEPARATOR}{}", format_date(first), format_date(last))
    }
}

/// Parse a condensed date block into its first and last dates
///
/// A single date yields the same date twice.
pub fn parse_date_range(s: &str) -> Result<(NaiveDate, NaiveDate)> {
    let invalid = || DssError::InvalidDate(format!("'{s}' is not a date block"));
    match s.split_once('-') {
        Some((first, last)) => {
            let first = parse_date_block(first).ok_or_else(invalid)?;
            let last = parse_date_block(last).ok_or_else(invalid)?;
            Ok((first, last))
        }
        None => {
            let date = parse_date_block(s).ok_or_else(invalid)?;
            Ok((date, date))
        }
    }
}
