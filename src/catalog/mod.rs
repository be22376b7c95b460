//! Condensed catalog of a DSS file
//!
//! The store lists every record separately, so a regular time series stored in
//! yearly blocks shows up once per block. The condensed catalog folds those
//! blocks into one entry whose date part spans the first to the last block:
//!
//! ```text
//! /S/L/P/01Jan1989/1Day/OBS/
//! /S/L/P/01Jan1990/1Day/OBS/   =>   /S/L/P/01Jan1989 - 01Jan1991/1Day/OBS/
//! /S/L/P/01Jan1991/1Day/OBS/
//! ```
//!
//! Paired data, grids, text, location and array records are listed as they are.
//! Entries come out with the ungrouped records first, in listing order, followed
//! by the condensed time series in the order their first block was listed.

pub mod cache;

use chrono::NaiveDate;
use indexmap::IndexMap;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::DssConfig;
use crate::error::{DssError, Result};
use crate::models::{DssPath, RecordType};
use crate::time::date_block::{format_date_range, parse_date_block};
use crate::utils::logging::{log_operation_complete, log_warning};

pub use cache::CatalogCache;

/// One record as listed by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCatalogEntry {
    /// Raw pathname
    pub path: String,
    /// Raw record type code
    pub record_code: i32,
}

impl RawCatalogEntry {
    /// Create a raw entry
    pub fn new(path: impl Into<String>, record_code: i32) -> Self {
        Self {
            path: path.into(),
            record_code,
        }
    }
}

/// One item of the condensed catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedEntry {
    /// Pathname; for time series the date part is a single date or a range
    pub path: DssPath,
    /// Record type
    pub record_type: RecordType,
}

/// Dates accumulated for one date-less time-series path
#[derive(Debug)]
struct DateGroup {
    template: DssPath,
    record_type: RecordType,
    dates: Vec<NaiveDate>,
}

/// Condensed catalog plus a pathname to record type lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CondensedEntry>,
    record_types: FxHashMap<String, RecordType>,
    case_fold: bool,
    skipped: usize,
}

impl Catalog {
    /// Build a condensed catalog with the default configuration
    pub fn build(entries: &[RawCatalogEntry]) -> Result<Self> {
        Self::build_with_config(entries, &DssConfig::default())
    }

    /// Build a condensed catalog from a raw store listing
    pub fn build_with_config(entries: &[RawCatalogEntry], config: &DssConfig) -> Result<Self> {
        let start = Instant::now();
        let mut catalog = Self {
            case_fold: config.case_fold_catalog_keys,
            ..Self::default()
        };
        let mut groups: IndexMap<String, DateGroup> = IndexMap::new();

        for entry in entries {
            let record_type = RecordType::classify(entry.record_code);
            let path = DssPath::parse(&entry.path, record_type)?;

            if record_type.is_time_series() {
                let Some(date) = parse_date_block(path.d()) else {
                    catalog.skipped += 1;
                    if config.log_skipped_entries {
                        log_warning("Skipping catalog entry with malformed date block", Some(&entry.path));
                    }
                    continue;
                };

                let key = catalog.key(&path.without_date().to_string());
                catalog.record_types.insert(key.clone(), record_type);

                groups
                    .entry(key)
                    .or_insert_with(|| DateGroup {
                        template: path.clone(),
                        record_type,
                        dates: Vec::new(),
                    })
                    .dates
                    .push(date);
            } else if record_type.is_cataloged_single() {
                let key = catalog.key(&path.to_string());
                catalog.record_types.insert(key, record_type);
                catalog.items.push(CondensedEntry { path, record_type });
            } else {
                return Err(DssError::UnsupportedRecordType {
                    path: entry.path.clone(),
                    record_type: record_type.to_string(),
                });
            }
        }

        for (_, group) in groups {
            let dates: Vec<NaiveDate> = group.dates.into_iter().sorted().dedup().collect();
            let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
                continue;
            };

            let mut path = group.template;
            path.set_d(format_date_range(*first, *last));
            let key = catalog.key(&path.to_string());
            catalog.record_types.insert(key, group.record_type);
            catalog.items.push(CondensedEntry {
                path,
                record_type: group.record_type,
            });
        }

        log_operation_complete(
            "condensed",
            &format!("{} raw catalog entries", entries.len()),
            catalog.items.len(),
            Some(start.elapsed()),
        );
        Ok(catalog)
    }

    fn key(&self, path: &str) -> String {
        if self.case_fold {
            path.to_uppercase()
        } else {
            path.to_string()
        }
    }

    /// Look up the record type of a pathname
    ///
    /// Tries the exact pathname, then the pathname without its date part, then the
    /// location-only pathname.
    pub fn record_type(&self, path: &str) -> Result<RecordType> {
        let parsed: DssPath = path.parse()?;
        [parsed.clone(), parsed.without_date(), parsed.location_only()]
            .iter()
            .find_map(|candidate| self.record_types.get(&self.key(&candidate.to_string())))
            .copied()
            .ok_or_else(|| DssError::UnknownIdentifier(path.to_string()))
    }

    /// Condensed entries
    #[must_use]
    pub fn items(&self) -> &[CondensedEntry] {
        &self.items
    }

    /// Iterate over the condensed entries
    pub fn iter(&self) -> std::slice::Iter<'_, CondensedEntry> {
        self.items.iter()
    }

    /// Condensed pathnames as strings
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.items.iter().map(|entry| entry.path.to_string()).collect()
    }

    /// Number of condensed entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of raw entries skipped because of a malformed date block
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of condensed entries per record type, in first-seen order
    #[must_use]
    pub fn type_counts(&self) -> Vec<(RecordType, usize)> {
        self.items
            .iter()
            .map(|entry| entry.record_type)
            .counts()
            .into_iter()
            .sorted_by_key(|(record_type, _)| {
                self.items
                    .iter()
                    .position(|entry| entry.record_type == *record_type)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CondensedEntry;
    type IntoIter = std::slice::Iter<'a, CondensedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
