//! A Rust library for cataloging and reading HEC-DSS records, with
//! calendar-aware time encoding and interval handling.

pub mod catalog;
pub mod config;
pub mod cwms;
pub mod error;
pub mod models;
pub mod records;
pub mod store;
pub mod time;
pub mod timeseries;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DssConfig;
pub use error::{DssError, Result};
pub use models::{DssPath, DssType, PathPart, RecordType};

// Catalog
pub use catalog::{Catalog, CatalogCache, CondensedEntry, RawCatalogEntry};

// Time handling
pub use time::{
    Granularity, Interval, IntervalSpec, decode_boundary_time, encode_boundary_time,
    from_calendar, generate_times, interval_to_seconds, seconds_to_interval, to_calendar,
};

// Records and store access
pub use records::{PairedData, TextRecord};
pub use store::{DssFile, DssStore, StoredPairedData, StoredTimeSeries, TimeWindow};
pub use timeseries::{IrregularTimeSeries, RegularTimeSeries, TimeSeries};

// Utility functions
pub use utils::init_logging;
