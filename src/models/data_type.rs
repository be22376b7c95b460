//! Time-series data types (how a value relates to its time step)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DssError, Result};

/// DSS data type of a time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DssType {
    /// Period average
    PerAver,
    /// Period cumulative
    PerCum,
    /// Instantaneous value
    InstVal,
    /// Instantaneous cumulative
    InstCum,
    /// Frequency
    Freq,
    /// Period maximum
    PerMax,
    /// Period minimum
    PerMin,
    /// Constant
    Const,
}

impl DssType {
    /// The store's string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerAver => "PER-AVER",
            Self::PerCum => "PER-CUM",
            Self::InstVal => "INST-VAL",
            Self::InstCum => "INST-CUM",
            Self::Freq => "FREQ",
            Self::PerMax => "PER-MAX",
            Self::PerMin => "PER-MIN",
            Self::Const => "CONST",
        }
    }
}

impl fmt::Display for DssType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DssType {
    type Err = DssError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PER-AVER" => Ok(Self::PerAver),
            "PER-CUM" => Ok(Self::PerCum),
            "INST-VAL" => Ok(Self::InstVal),
            "INST-CUM" => Ok(Self::InstCum),
            "FREQ" => Ok(Self::Freq),
            "PER-MAX" => Ok(Self::PerMax),
            "PER-MIN" => Ok(Self::PerMin),
            "CONST" => Ok(Self::Const),
            _ => Err(DssError::UnknownDataType(s.to_string())),
        }
    }
}
