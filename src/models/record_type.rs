//! Record categories stored in a DSS file
//!
//! The store reports a raw integer code per record. This module maps those codes
//! onto a closed set of categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a DSS record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Unrecognized record code
    Unknown,
    /// Regular-interval time-series profile
    RegularProfile,
    /// Regular-interval time series
    Regular,
    /// Irregular-interval time series
    Irregular,
    /// Paired data (e.g. rating curves)
    PairedData,
    /// Text record
    Text,
    /// Gridded data
    Grid,
    /// Triangulated irregular network
    Tin,
    /// Location information
    LocationInfo,
    /// Array container
    Array,
}

impl RecordType {
    /// Classify a raw store record code
    #[must_use]
    pub const fn classify(code: i32) -> Self {
        match code {
            20 => Self::LocationInfo,
            90..=93 => Self::Array,
            // profile codes sit inside the regular range
            102 | 107 => Self::RegularProfile,
            100..=109 => Self::Regular,
            110..=199 => Self::Irregular,
            200..=299 => Self::PairedData,
            300..=399 => Self::Text,
            400..=449 => Self::Grid,
            450 => Self::Tin,
            _ => Self::Unknown,
        }
    }

    /// Whether this category belongs to the time-series family
    #[must_use]
    pub const fn is_time_series(self) -> bool {
        matches!(self, Self::Regular | Self::Irregular | Self::RegularProfile)
    }

    /// Whether the catalog lists records of this category without grouping
    #[must_use]
    pub const fn is_cataloged_single(self) -> bool {
        matches!(
            self,
            Self::PairedData | Self::Grid | Self::Text | Self::LocationInfo | Self::Array
        )
    }

    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::RegularProfile => "Regular Time Series Profile",
            Self::Regular => "Regular Time Series",
            Self::Irregular => "Irregular Time Series",
            Self::PairedData => "Paired Data",
            Self::Text => "Text",
            Self::Grid => "Grid",
            Self::Tin => "TIN",
            Self::LocationInfo => "Location Info",
            Self::Array => "Array",
        }
    }

    /// Get all categories
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::Unknown,
            Self::RegularProfile,
            Self::Regular,
            Self::Irregular,
            Self::PairedData,
            Self::Text,
            Self::Grid,
            Self::Tin,
            Self::LocationInfo,
            Self::Array,
        ]
    }
}

impl From<i32> for RecordType {
    fn from(code: i32) -> Self {
        Self::classify(code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
