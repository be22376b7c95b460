//! Non time-series record containers
//!
//! Paired data and text are read and written through [`DssFile`](crate::DssFile)
//! alongside time series. Grids, location info and arrays are listed in the
//! catalog but not decoded.

pub mod paired_data;
pub mod text;

pub use paired_data::PairedData;
pub use text::TextRecord;
