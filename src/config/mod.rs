//! Configuration for `DssFile` and catalog construction.

use std::fmt;

use crate::time::Granularity;

/// Configuration for reading and writing DSS records
#[derive(Debug, Clone)]
pub struct DssConfig {
    /// Granularity used when encoding irregular series for storage
    pub time_granularity: Granularity,
    /// Fold catalog lookup keys to upper case (pathnames are case-insensitive)
    pub case_fold_catalog_keys: bool,
    /// Log a warning for each catalog entry skipped during condensing
    pub log_skipped_entries: bool,
    /// Store values as single precision
    pub save_as_float: bool,
}

impl Default for DssConfig {
    fn default() -> Self {
        Self {
            time_granularity: Granularity::Minute,
            case_fold_catalog_keys: true,
            log_skipped_entries: true,
            save_as_float: false,
        }
    }
}

impl DssConfig {
    /// Create a default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage granularity for irregular series
    #[must_use]
    pub const fn with_time_granularity(mut self, granularity: Granularity) -> Self {
        self.time_granularity = granularity;
        self
    }

    /// Enable or disable case folding of catalog keys
    #[must_use]
    pub const fn with_case_fold_catalog_keys(mut self, fold: bool) -> Self {
        self.case_fold_catalog_keys = fold;
        self
    }

    /// Enable or disable warnings for skipped catalog entries
    #[must_use]
    pub const fn with_log_skipped_entries(mut self, log: bool) -> Self {
        self.log_skipped_entries = log;
        self
    }

    /// Store values as single precision
    #[must_use]
    pub const fn with_save_as_float(mut self, save_as_float: bool) -> Self {
        self.save_as_float = save_as_float;
        self
    }
}

impl fmt::Display for DssConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DSS Configuration:")?;
        writeln!(f, "  Time Granularity: {:?}", self.time_granularity)?;
        writeln!(f, "  Case Fold Catalog Keys: {}", self.case_fold_catalog_keys)?;
        writeln!(f, "  Log Skipped Entries: {}", self.log_skipped_entries)?;
        writeln!(f, "  Save As Float: {}", self.save_as_float)?;
        Ok(())
    }
}
