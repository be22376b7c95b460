//! Logging utilities for output and operation tracking
//!
//! This module provides utilities for logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{catalog_summary_lines, print_catalog, print_catalog_summary};
pub use log::{init_logging, log_operation_complete, log_operation_start, log_warning};
