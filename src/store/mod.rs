//! Interface to the underlying DSS store
//!
//! The crate performs no file I/O itself. A [`DssStore`] lists, retrieves,
//! writes and deletes records in the store's own terms (raw pathnames, integer
//! type codes, integer time arrays and status codes); [`DssFile`] turns those
//! into catalogs, time series, paired data and text.

pub mod file;

use chrono::NaiveDateTime;

use crate::catalog::RawCatalogEntry;
use crate::error::Result;
use crate::time::codec::encode_boundary_time;

pub use file::DssFile;

/// Time range of a retrieval; an open end means "whatever the record holds"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TimeWindow {
    /// Window between two instants
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Unbounded window
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Whether both ends are open
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Start as the store's (date, time) tokens
    #[must_use]
    pub fn start_tokens(&self) -> Option<(String, String)> {
        self.start.map(encode_boundary_time)
    }

    /// End as the store's (date, time) tokens
    #[must_use]
    pub fn end_tokens(&self) -> Option<(String, String)> {
        self.end.map(encode_boundary_time)
    }
}

/// A time-series record as the store returns it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredTimeSeries {
    /// Unit counts from the base day, one per value
    pub times: Vec<i32>,
    pub values: Vec<f64>,
    /// Size of one time unit
    pub granularity_seconds: i64,
    /// Base day counted from the store epoch
    pub base_day_offset: i32,
    pub quality: Vec<i32>,
    pub units: String,
    pub data_type: String,
    pub time_zone_name: String,
}

/// Write request for a regular series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegularStoreRequest {
    pub path: String,
    pub values: Vec<f64>,
    pub quality: Vec<i32>,
    /// Start date token (`DDMmmYYYY`)
    pub start_date: String,
    /// Start time token, `24:00` for midnight
    pub start_time: String,
    pub units: String,
    pub data_type: String,
    pub time_zone_name: String,
    pub save_as_float: bool,
}

/// Write request for an irregular series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrregularStoreRequest {
    pub path: String,
    /// Unit counts from the base date, one per value
    pub times: Vec<i32>,
    pub values: Vec<f64>,
    pub quality: Vec<i32>,
    pub granularity_seconds: i64,
    /// Base date token (`DDMmmYYYY`)
    pub base_date: String,
    pub units: String,
    pub data_type: String,
    pub time_zone_name: String,
    pub save_as_float: bool,
}

/// A paired-data record as the store holds it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredPairedData {
    pub ordinates: Vec<f64>,
    /// Curve values, all ordinates of the first curve, then the second, ...
    pub values: Vec<f64>,
    pub curve_count: usize,
    pub units_independent: String,
    pub units_dependent: String,
    pub type_independent: String,
    pub type_dependent: String,
    pub labels: Vec<String>,
    pub time_zone_name: String,
}

/// Operations the underlying store provides
///
/// Write and delete calls return the store's status code, zero on success.
pub trait DssStore {
    /// List the records of the store
    ///
    /// # Arguments
    ///
    /// * `filter` - Pathname filter, empty for every record
    ///
    /// # Returns
    ///
    /// * `Result<Vec<RawCatalogEntry>>` - Raw pathnames with their type codes
    fn catalog(&mut self, filter: &str) -> Result<Vec<RawCatalogEntry>>;

    /// Read a time-series record
    ///
    /// # Arguments
    ///
    /// * `path` - Record pathname
    /// * `window` - Time range to read
    fn retrieve_time_series(&mut self, path: &str, window: &TimeWindow) -> Result<StoredTimeSeries>;

    /// Write a regular series, returning the store status
    fn store_regular(&mut self, request: &RegularStoreRequest) -> i32;

    /// Write an irregular series, returning the store status
    fn store_irregular(&mut self, request: &IrregularStoreRequest) -> i32;

    /// Read a paired-data record
    fn retrieve_paired_data(&mut self, path: &str) -> Result<StoredPairedData>;

    /// Write a paired-data record, returning the store status
    ///
    /// # Arguments
    ///
    /// * `path` - Record pathname
    /// * `data` - Ordinates and curve values in the store layout
    fn store_paired_data(&mut self, path: &str, data: &StoredPairedData) -> i32;

    /// Read a text record
    fn retrieve_text(&mut self, path: &str) -> Result<String>;

    /// Write a text record, returning the store status
    fn store_text(&mut self, path: &str, text: &str) -> i32;

    /// Delete a record, returning the store status
    fn delete(&mut self, path: &str) -> i32;

    /// Raw type code of a record, 0 when the record does not exist
    fn record_type(&mut self, path: &str) -> i32;
}
