//! Logging utilities
//!
//! This module provides standardized logging functions for store operations.

use std::time::Duration;

/// Initialize `env_logger`, defaulting to the `info` level
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(cfg!(test))
        .try_init();
}

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - Pathname or pathname filter being operated on
pub fn log_operation_start(operation: &str, target: &str) {
    log::debug!("{operation} {target}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - Pathname or pathname filter that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    target: &str,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items from {target} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items from {target}");
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional pathname related to the warning
pub fn log_warning(message: &str, path: Option<&str>) {
    if let Some(path) = path {
        log::warn!("{message}: {path}");
    } else {
        log::warn!("{message}");
    }
}
