//! Time-series containers
//!
//! [`RegularTimeSeries`] reconciles its interval on construction and can
//! regenerate its timestamps; [`IrregularTimeSeries`] carries explicit times.
//! [`TimeSeries`] is what a store retrieval hands back.

pub mod irregular;
pub mod reconcile;
pub mod regular;

use chrono::NaiveDateTime;

use crate::models::DssPath;

pub use irregular::IrregularTimeSeries;
pub use reconcile::reconcile_interval;
pub use regular::{RegularTimeSeries, RegularTimeSeriesBuilder};

/// A regular or irregular series
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSeries {
    Regular(RegularTimeSeries),
    Irregular(IrregularTimeSeries),
}

impl TimeSeries {
    /// Record pathname
    #[must_use]
    pub const fn path(&self) -> Option<&DssPath> {
        match self {
            Self::Regular(series) => series.path.as_ref(),
            Self::Irregular(series) => series.path.as_ref(),
        }
    }

    #[must_use]
    pub fn times(&self) -> &[NaiveDateTime] {
        match self {
            Self::Regular(series) => &series.times,
            Self::Irregular(series) => &series.times,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Regular(series) => &series.values,
            Self::Irregular(series) => &series.values,
        }
    }

    #[must_use]
    pub fn units(&self) -> &str {
        match self {
            Self::Regular(series) => &series.units,
            Self::Irregular(series) => &series.units,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    #[must_use]
    pub const fn is_regular(&self) -> bool {
        matches!(self, Self::Regular(_))
    }

    /// The regular series, if this is one
    #[must_use]
    pub const fn as_regular(&self) -> Option<&RegularTimeSeries> {
        match self {
            Self::Regular(series) => Some(series),
            Self::Irregular(_) => None,
        }
    }

    /// The irregular series, if this is one
    #[must_use]
    pub const fn as_irregular(&self) -> Option<&IrregularTimeSeries> {
        match self {
            Self::Irregular(series) => Some(series),
            Self::Regular(_) => None,
        }
    }
}

impl From<RegularTimeSeries> for TimeSeries {
    fn from(series: RegularTimeSeries) -> Self {
        Self::Regular(series)
    }
}

impl From<IrregularTimeSeries> for TimeSeries {
    fn from(series: IrregularTimeSeries) -> Self {
        Self::Irregular(series)
    }
}
