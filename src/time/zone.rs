//! Time zone names attached to time series

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Resolve an IANA zone name
///
/// An empty name means "no zone". A name that cannot be resolved degrades to no
/// zone with a warning instead of failing the caller.
#[must_use]
pub fn resolve_time_zone(name: &str) -> Option<Tz> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    match name.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            log::warn!("Unknown time zone '{name}'; timestamps are left without a zone");
            None
        }
    }
}

/// Attach a zone to a local wall-clock time
///
/// Ambiguous times take the earlier offset. Times inside a daylight-saving gap are
/// interpreted as UTC.
#[must_use]
pub fn attach_zone(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&local)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}
