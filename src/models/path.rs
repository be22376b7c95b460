//! DSS pathnames
//!
//! A pathname identifies one record and has six parts, `/A/B/C/D/E/F/`:
//! watershed, location, parameter, date block, interval (or block length) and
//! version. Time-series records share every part except the date block, which is
//! why the catalog groups on the date-less view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{DssError, Result};
use crate::models::record_type::RecordType;

/// One of the six pathname parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPart {
    /// Watershed / project
    A,
    /// Location
    B,
    /// Parameter
    C,
    /// Date block
    D,
    /// Interval or block length
    E,
    /// Version
    F,
}

/// A parsed DSS pathname plus the record type it was listed with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DssPath {
    parts: [String; 6],
    record_type: RecordType,
}

impl DssPath {
    /// Minimum length of a pathname: seven slashes and empty parts
    const MIN_LEN: usize = 7;

    /// Parse a pathname, tagging it with `record_type`
    pub fn parse(path: &str, record_type: RecordType) -> Result<Self> {
        let trimmed = path.trim();
        if trimmed.len() < Self::MIN_LEN || !trimmed.starts_with('/') || !trimmed.ends_with('/') {
            return Err(DssError::InvalidPath(path.to_string()));
        }

        let inner = &trimmed[1..trimmed.len() - 1];
        let split: Vec<&str> = inner.split('/').collect();
        let [a, b, c, d, e, f] = split.as_slice() else {
            return Err(DssError::InvalidPath(path.to_string()));
        };

        Ok(Self {
            parts: [a, b, c, d, e, f].map(|part| (*part).to_string()),
            record_type,
        })
    }

    /// Build a pathname from its parts
    #[must_use]
    pub fn from_parts(
        a: &str,
        b: &str,
        c: &str,
        d: &str,
        e: &str,
        f: &str,
        record_type: RecordType,
    ) -> Self {
        Self {
            parts: [a, b, c, d, e, f].map(str::to_string),
            record_type,
        }
    }

    /// Get a part by name
    #[must_use]
    pub fn part(&self, part: PathPart) -> &str {
        &self.parts[part as usize]
    }

    /// Replace a part
    pub fn set_part(&mut self, part: PathPart, value: impl Into<String>) {
        self.parts[part as usize] = value.into();
    }

    /// A part (watershed)
    #[must_use]
    pub fn a(&self) -> &str {
        self.part(PathPart::A)
    }

    /// B part (location)
    #[must_use]
    pub fn b(&self) -> &str {
        self.part(PathPart::B)
    }

    /// C part (parameter)
    #[must_use]
    pub fn c(&self) -> &str {
        self.part(PathPart::C)
    }

    /// D part (date block)
    #[must_use]
    pub fn d(&self) -> &str {
        self.part(PathPart::D)
    }

    /// E part (interval or block length)
    #[must_use]
    pub fn e(&self) -> &str {
        self.part(PathPart::E)
    }

    /// F part (version)
    #[must_use]
    pub fn f(&self) -> &str {
        self.part(PathPart::F)
    }

    /// Replace the date block
    pub fn set_d(&mut self, value: impl Into<String>) {
        self.set_part(PathPart::D, value);
    }

    /// Replace the interval part
    pub fn set_e(&mut self, value: impl Into<String>) {
        self.set_part(PathPart::E, value);
    }

    /// Record type this path was listed with
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Re-tag the path with another record type
    #[must_use]
    pub fn with_record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// Whether the tagged record type is a time series
    #[must_use]
    pub const fn is_time_series(&self) -> bool {
        self.record_type.is_time_series()
    }

    /// Copy of this path with the date block cleared
    #[must_use]
    pub fn without_date(&self) -> Self {
        let mut path = self.clone();
        path.set_d("");
        path
    }

    /// Copy of this path keeping only the A and B parts
    #[must_use]
    pub fn location_only(&self) -> Self {
        let mut path = self.clone();
        for part in [PathPart::C, PathPart::D, PathPart::E, PathPart::F] {
            path.set_part(part, "");
        }
        path
    }
}

impl fmt::Display for DssPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.parts.join("/"))
    }
}

impl FromStr for DssPath {
    type Err = DssError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, RecordType::Unknown)
    }
}

impl PartialEq for DssPath {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for DssPath {}

impl Hash for DssPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
    }
}

impl From<DssPath> for String {
    fn from(path: DssPath) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for DssPath {
    type Error = DssError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
