//! Irregular time series

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::{DssError, Result};
use crate::models::{DssPath, DssType};
use crate::time::codec::julian_base_date;
use crate::time::granularity::Granularity;
use crate::time::zone::{attach_zone, resolve_time_zone};

/// Values at arbitrary instants
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularTimeSeries {
    pub values: Vec<f64>,
    pub times: Vec<NaiveDateTime>,
    /// Quality flags, empty or one per value
    pub quality: Vec<i32>,
    pub units: String,
    pub data_type: Option<DssType>,
    /// Granularity the times were stored with
    pub granularity: Granularity,
    /// Days from 01Jan1900 to the first time
    pub julian_base_date: i32,
    /// IANA zone name, empty for none
    pub time_zone_name: String,
    pub path: Option<DssPath>,
}

impl IrregularTimeSeries {
    /// Create a series from paired times and values
    ///
    /// The julian base date is taken from the first time.
    pub fn new(times: Vec<NaiveDateTime>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(DssError::InvalidTimeSeries(format!(
                "{} times for {} values",
                times.len(),
                values.len()
            )));
        }
        let julian_base_date = times.first().map_or(0, |first| julian_base_date(*first));
        Ok(Self {
            values,
            times,
            quality: Vec::new(),
            units: String::new(),
            data_type: None,
            granularity: Granularity::Second,
            julian_base_date,
            time_zone_name: String::new(),
            path: None,
        })
    }

    /// Set quality flags, one per value
    pub fn with_quality(mut self, quality: Vec<i32>) -> Result<Self> {
        if !quality.is_empty() && quality.len() != self.values.len() {
            return Err(DssError::InvalidTimeSeries(format!(
                "{} quality flags for {} values",
                quality.len(),
                self.values.len()
            )));
        }
        self.quality = quality;
        Ok(self)
    }

    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    #[must_use]
    pub const fn with_data_type(mut self, data_type: DssType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    #[must_use]
    pub const fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Override the derived julian base date
    #[must_use]
    pub const fn with_julian_base_date(mut self, julian_base_date: i32) -> Self {
        self.julian_base_date = julian_base_date;
        self
    }

    #[must_use]
    pub fn with_time_zone_name(mut self, name: impl Into<String>) -> Self {
        self.time_zone_name = name.into();
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: DssPath) -> Self {
        self.path = Some(path);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value stored at `time`, if the series has that timestamp
    #[must_use]
    pub fn value_at(&self, time: NaiveDateTime) -> Option<f64> {
        self.times
            .iter()
            .position(|t| *t == time)
            .and_then(|i| self.values.get(i).copied())
    }

    /// Timestamps with the series zone attached, `None` when there is no zone
    #[must_use]
    pub fn zoned_times(&self) -> Option<Vec<DateTime<Tz>>> {
        let tz = resolve_time_zone(&self.time_zone_name)?;
        Some(self.times.iter().map(|t| attach_zone(tz, *t)).collect())
    }
}
