//! Time handling for DSS records
//!
//! This module converts between the store's integer time encoding and calendar
//! timestamps, names and steps intervals, and parses the store's date tokens.

pub mod calendar;
pub mod codec;
pub mod date_block;
pub mod granularity;
pub mod interval;
pub mod zone;

// Re-export commonly used functions for convenience
pub use calendar::{add_months, add_years, clamp_day, days_in_month, generate_times};
pub use codec::{
    EncodedTimes, TemporalEncoding, decode_boundary_time, encode_boundary_time, from_calendar,
    julian_base_date, times_from_encoded, to_calendar,
};
pub use date_block::{format_date, format_date_range, parse_date_block, parse_date_range};
pub use granularity::Granularity;
pub use interval::{Interval, IntervalSpec, interval_to_seconds, seconds_to_interval};
pub use zone::{attach_zone, resolve_time_zone};
