//! Conversion between DSS pathnames and CWMS time-series identifiers
//!
//! A CWMS id has six '.'-separated parts:
//!
//! ```text
//! Location.Parameter.Type.Interval.Duration.Version
//! NORK-Norton-Prairie_Dog.Stage.Inst.15Minutes.0.nwklrgs-raw
//! ```
//!
//! The location is the pathname's A and B parts joined by '-', the interval is
//! the E part with a plural unit when the count is not one.

use crate::error::{DssError, Result};
use crate::models::{DssPath, DssType, RecordType};
use crate::time::interval::{Interval, PSEUDO_REGULAR_PREFIX};

/// E part used for CWMS irregular series (interval `0`)
pub const IRREGULAR_E_PART: &str = "IR-Month";

/// CWMS parameter type for a DSS data type
#[must_use]
pub const fn cwms_parameter_type(dss_type: DssType) -> &'static str {
    match dss_type {
        DssType::InstVal | DssType::InstCum | DssType::Freq => "Inst",
        DssType::PerAver => "Ave",
        DssType::PerCum => "Total",
        DssType::PerMax => "Max",
        DssType::PerMin => "Min",
        DssType::Const => "Const",
    }
}

/// Title-case a segment: a letter is upper-cased after a non-letter and
/// lower-cased after a letter (`nwklrgs-raw` -> `Nwklrgs-Raw`)
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut after_letter = false;
    s.chars()
        .flat_map(|c| {
            let mapped: Vec<char> = if !c.is_alphabetic() {
                vec![c]
            } else if after_letter {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            after_letter = c.is_alphabetic();
            mapped
        })
        .collect()
}

/// CWMS interval for a pathname E part
fn cwms_interval(e_part: &str) -> Result<String> {
    let interval: Interval = e_part.parse()?;
    if interval.is_irregular() {
        return Ok("0".to_string());
    }

    let name = interval.name();
    let count_len = name.find(|c: char| !c.is_ascii_digit()).unwrap_or(name.len());
    let plural = match name[..count_len].parse::<u32>() {
        Ok(count) => count != 1,
        Err(_) => false,
    };

    let prefix = if interval.is_pseudo_regular() {
        PSEUDO_REGULAR_PREFIX.to_string()
    } else {
        String::new()
    };
    let suffix = if plural { "s" } else { "" };
    Ok(format!("{prefix}{name}{suffix}"))
}

/// E part for a CWMS interval
fn dss_interval(cwms_interval: &str) -> String {
    if cwms_interval == "0" {
        return IRREGULAR_E_PART.to_string();
    }
    match cwms_interval.strip_suffix('s') {
        Some(singular) if singular.parse::<Interval>().is_ok() => singular.to_string(),
        _ => cwms_interval.to_string(),
    }
}

/// Convert a pathname to a CWMS time-series id
///
/// In strict mode the location and version are title-cased.
pub fn pathname_to_cwms_tsid(
    path: &str,
    dss_type: DssType,
    duration: &str,
    strict: bool,
) -> Result<String> {
    let path: DssPath = path.parse()?;

    let location = [path.a().trim(), path.b().trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if location.is_empty() {
        return Err(DssError::InvalidCwmsId(format!("{path} has no location")));
    }
    let version = path.f().trim();
    let (location, version) = if strict {
        (title_case(&location), title_case(version))
    } else {
        (location, version.to_string())
    };

    Ok(format!(
        "{location}.{}.{}.{}.{duration}.{version}",
        path.c().trim(),
        cwms_parameter_type(dss_type),
        cwms_interval(path.e().trim())?,
    ))
}

fn split_tsid(tsid: &str) -> Result<Vec<String>> {
    let parts: Vec<String> = tsid.replace('/', "-").split('.').map(str::to_string).collect();
    if parts.len() < 6 {
        return Err(DssError::InvalidCwmsId(tsid.to_string()));
    }
    Ok(parts)
}

/// Convert a CWMS time-series id to a pathname without a date part
///
/// The whole location goes to the B part; interval `0` becomes `IR-Month`.
pub fn cwms_tsid_to_pathname(tsid: &str) -> Result<DssPath> {
    let parts = split_tsid(tsid)?;
    let [location, parameter, _, interval, _, version, ..] = parts.as_slice() else {
        return Err(DssError::InvalidCwmsId(tsid.to_string()));
    };
    let record_type = if interval == "0" {
        RecordType::Irregular
    } else {
        RecordType::Regular
    };

    Ok(DssPath::from_parts(
        "",
        location,
        parameter,
        "",
        &dss_interval(interval),
        version,
        record_type,
    ))
}

/// DSS data type implied by a CWMS time-series id
///
/// Instantaneous precipitation is cumulative (`INST-CUM`).
pub fn dss_type_from_cwms_tsid(tsid: &str) -> Result<DssType> {
    let parts: Vec<&str> = tsid.split('.').collect();
    let [_, parameter, ts_type, ..] = parts.as_slice() else {
        return Err(DssError::InvalidCwmsId(tsid.to_string()));
    };
    match *ts_type {
        "Inst" if *parameter == "Precip" => Ok(DssType::InstCum),
        "Inst" => Ok(DssType::InstVal),
        "Total" => Ok(DssType::PerCum),
        "Ave" => Ok(DssType::PerAver),
        "Max" => Ok(DssType::PerMax),
        "Min" => Ok(DssType::PerMin),
        "Const" => Ok(DssType::Const),
        other => Err(DssError::InvalidCwmsId(format!(
            "{tsid} (unknown parameter type '{other}')"
        ))),
    }
}
