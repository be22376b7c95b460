//! Domain value types
//!
//! Pathnames, record categories and time-series data types shared by the
//! catalog, the time-series containers and the store handle.

pub mod data_type;
pub mod path;
pub mod record_type;

pub use data_type::DssType;
pub use path::{DssPath, PathPart};
pub use record_type::RecordType;
