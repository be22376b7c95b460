//! Regular interval time series

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::{DssError, Result};
use crate::models::{DssPath, DssType};
use crate::time::calendar::generate_times;
use crate::time::interval::{Interval, is_pseudo_regular};
use crate::time::zone::{attach_zone, resolve_time_zone};
use crate::timeseries::reconcile::{inferred_interval, reconcile_interval};

/// Values at a fixed interval
#[derive(Debug, Clone, PartialEq)]
pub struct RegularTimeSeries {
    /// Data values
    pub values: Vec<f64>,
    /// One timestamp per value
    pub times: Vec<NaiveDateTime>,
    /// Quality flags, empty or one per value
    pub quality: Vec<i32>,
    /// Units of the values
    pub units: String,
    /// Data type
    pub data_type: Option<DssType>,
    /// Interval, when it could be determined
    pub interval: Option<Interval>,
    /// First timestamp
    pub start: Option<NaiveDateTime>,
    /// Record pathname
    pub path: Option<DssPath>,
    /// IANA zone name, empty for none
    pub time_zone_name: String,
}

impl RegularTimeSeries {
    /// Start building a series from its values
    #[must_use]
    pub fn builder(values: Vec<f64>) -> RegularTimeSeriesBuilder {
        RegularTimeSeriesBuilder::new(values)
    }

    /// Number of values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no values
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

    /// Resolved time zone of the series
    #[must_use]
    pub fn time_zone(&self) -> Option<Tz> {
        resolve_time_zone(&self.time_zone_name)
    }

    /// Timestamps with the series zone attached, `None` when there is no zone
    #[must_use]
    pub fn zoned_times(&self) -> Option<Vec<DateTime<Tz>>> {
        let tz = self.time_zone()?;
        Some(self.times.iter().map(|t| attach_zone(tz, *t)).collect())
    }
}

/// Builder for [`RegularTimeSeries`]
#[derive(Debug, Clone, Default)]
pub struct RegularTimeSeriesBuilder {
    values: Vec<f64>,
    times: Vec<NaiveDateTime>,
    quality: Vec<i32>,
    units: String,
    data_type: Option<DssType>,
    interval: Option<Interval>,
    start: Option<NaiveDateTime>,
    path: Option<DssPath>,
    time_zone_name: String,
}

impl RegularTimeSeriesBuilder {
    /// Create a builder for `values`
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn times(mut self, times: Vec<NaiveDateTime>) -> Self {
        self.times = times;
        self
    }

    #[must_use]
    pub fn quality(mut self, quality: Vec<i32>) -> Self {
        self.quality = quality;
        self
    }

    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    #[must_use]
    pub const fn data_type(mut self, data_type: DssType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Explicit interval in seconds
    pub fn interval_seconds(mut self, seconds: i64) -> Result<Self> {
        self.interval = Some(Interval::from_seconds(seconds)?);
        Ok(self)
    }

    #[must_use]
    pub const fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn path(mut self, path: DssPath) -> Self {
        self.path = Some(path);
        self
    }

    #[must_use]
    pub fn time_zone_name(mut self, name: impl Into<String>) -> Self {
        self.time_zone_name = name.into();
        self
    }

    /// Reconcile the interval and fill in whatever the caller left out
    ///
    /// Fails with `InconsistentInterval` before anything is modified when the
    /// explicit interval, the path's E part and the time step disagree. With a
    /// resolved interval the path's E part is rewritten to the canonical name and
    /// times are generated from the start when none were given.
    pub fn build(self) -> Result<RegularTimeSeries> {
        let Self {
            values,
            mut times,
            quality,
            units,
            data_type,
            interval,
            start,
            mut path,
            time_zone_name,
        } = self;

        if !times.is_empty() && times.len() != values.len() {
            return Err(DssError::InvalidTimeSeries(format!(
                "{} times for {} values",
                times.len(),
                values.len()
            )));
        }
        if !quality.is_empty() && quality.len() != values.len() {
            return Err(DssError::InvalidTimeSeries(format!(
                "{} quality flags for {} values",
                quality.len(),
                values.len()
            )));
        }

        let path_interval = match path.as_ref().map(DssPath::e) {
            Some(e) if !e.trim().is_empty() => Some(e.parse::<Interval>()?),
            _ => None,
        };
        let step = match times.as_slice() {
            [first, second, ..] => Some(inferred_interval(*first, *second)),
            _ => None,
        };
        let resolved = reconcile_interval(&[
            interval.map(|i| i.seconds()),
            path_interval.map(|i| i.seconds()),
            step,
        ])?;

        let start = start.or_else(|| times.first().copied());
        let pseudo_regular = interval.is_some_and(|i| i.is_pseudo_regular())
            || path.as_ref().is_some_and(|p| is_pseudo_regular(p.e()));

        let interval = match resolved {
            Some(seconds) => {
                let interval = Interval::from_seconds(seconds)?.with_pseudo_regular(pseudo_regular);
                if let Some(path) = path.as_mut() {
                    path.set_e(interval.to_string());
                }
                if times.is_empty() {
                    if let Some(start) = start {
                        times = generate_times(start, values.len(), seconds)?;
                    }
                }
                Some(interval)
            }
            None => None,
        };

        Ok(RegularTimeSeries {
            values,
            times,
            quality,
            units,
            data_type,
            interval,
            start,
            path,
            time_zone_name,
        })
    }
}
