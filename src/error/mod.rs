//! Error handling for the DSS reader.

use thiserror::Error;

/// Specialized error type for catalog, time and store operations
#[derive(Debug, Error)]
pub enum DssError {
    /// Malformed pathname (not six '/'-delimited parts)
    #[error("Invalid DSS path: '{0}'")]
    InvalidPath(String),
    /// Record type the catalog does not know how to list
    #[error("Unsupported record type '{record_type}' for path {path}")]
    UnsupportedRecordType {
        /// Pathname as listed by the store
        path: String,
        /// Display name of the record type
        record_type: String,
    },
    /// Pathname not present in the catalog, even after fallbacks
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),
    /// Granularity outside of 1, 60, 3600 or 86400 seconds
    #[error(
        "Unsupported time granularity of {0} seconds; use 1 (second), 60 (minute), 3600 (hour) or 86400 (day)"
    )]
    UnsupportedGranularity(i64),
    /// Encoded value does not fit the store's 32-bit integer times
    #[error(
        "Time encoding overflow: {value} exceeds the 32-bit range at {granularity_seconds}s granularity; coarsen the granularity or move the base date closer to the data"
    )]
    EncodingOverflow {
        /// Offending encoded value
        value: i64,
        /// Granularity in use
        granularity_seconds: i64,
    },
    /// Interval name missing from the interval table
    #[error("Unknown interval: '{0}'")]
    UnknownInterval(String),
    /// Interval sources (field, E part, time step) disagree
    #[error("Inconsistent interval: sources disagree ({0})")]
    InconsistentInterval(String),
    /// Operation is recognized but deliberately not implemented
    #[error("Not supported: {0}")]
    NotSupported(String),
    /// Date or time token that cannot be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    /// Structurally broken series (mismatched arrays, missing data)
    #[error("Invalid time series: {0}")]
    InvalidTimeSeries(String),
    /// Structurally broken paired data or text record
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    /// Data type token not in the store's vocabulary
    #[error("Unknown data type: '{0}'; expected one of PER-AVER, PER-CUM, INST-VAL, INST-CUM, FREQ, PER-MAX, PER-MIN, CONST")]
    UnknownDataType(String),
    /// Malformed CWMS time-series identifier
    #[error("Invalid CWMS time-series id: '{0}'")]
    InvalidCwmsId(String),
    /// Non-zero status returned by the underlying store
    #[error("Store error: {operation} failed with status {status}")]
    Store {
        /// Name of the store call
        operation: String,
        /// Status code reported by the store
        status: i32,
    },
}

impl DssError {
    /// Build a store error from a failed call and its status
    pub fn store(operation: impl Into<String>, status: i32) -> Self {
        Self::Store {
            operation: operation.into(),
            status,
        }
    }

    /// Whether retrying with different arguments (granularity, base date) can help
    #[must_use]
    pub const fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedGranularity(_) | Self::EncodingOverflow { .. }
        )
    }
}

/// Result type for DSS reader operations
pub type Result<T> = std::result::Result<T, DssError>;
