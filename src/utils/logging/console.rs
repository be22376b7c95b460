//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use crate::catalog::Catalog;

/// Print every condensed catalog entry, one per line
pub fn print_catalog(catalog: &Catalog) {
    for entry in catalog.iter() {
        println!("{}", entry.path);
    }
}

/// Print a summary line per record type
pub fn print_catalog_summary(catalog: &Catalog) {
    for line in catalog_summary_lines(catalog) {
        println!("{line}");
    }
}

/// Summary lines: a total followed by one line per record type
#[must_use]
pub fn catalog_summary_lines(catalog: &Catalog) -> Vec<String> {
    std::iter::once(format!("Catalog: {} entries", catalog.len()))
        .chain(
            catalog
                .type_counts()
                .into_iter()
                .map(|(record_type, count)| format!("  - {record_type}: {count}")),
        )
        .collect()
}
