//! Paired data (curves sharing one set of ordinates)

use crate::error::{DssError, Result};
use crate::models::DssPath;

/// One or more curves over a shared independent axis, such as a rating table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairedData {
    /// Independent values
    pub ordinates: Vec<f64>,
    /// Dependent values, one vector per curve, each as long as `ordinates`
    pub curves: Vec<Vec<f64>>,
    /// Curve labels; may be shorter than `curves`
    pub labels: Vec<String>,
    pub units_independent: String,
    pub units_dependent: String,
    pub type_independent: String,
    pub type_dependent: String,
    /// IANA zone name, empty for none
    pub time_zone_name: String,
    pub path: Option<DssPath>,
}

impl PairedData {
    /// Create paired data from ordinates and curves
    pub fn new(ordinates: Vec<f64>, curves: Vec<Vec<f64>>) -> Result<Self> {
        if let Some((index, curve)) = curves
            .iter()
            .enumerate()
            .find(|(_, curve)| curve.len() != ordinates.len())
        {
            return Err(DssError::InvalidRecord(format!(
                "curve {} has {} values for {} ordinates",
                index + 1,
                curve.len(),
                ordinates.len()
            )));
        }
        Ok(Self {
            ordinates,
            curves,
            ..Self::default()
        })
    }

    /// Rebuild curves from the store's flat value array, curve after curve
    pub fn from_flat(ordinates: Vec<f64>, values: &[f64], curve_count: usize) -> Result<Self> {
        if values.len() != ordinates.len() * curve_count {
            return Err(DssError::InvalidRecord(format!(
                "{} values for {} ordinates and {curve_count} curves",
                values.len(),
                ordinates.len()
            )));
        }
        let curves = if ordinates.is_empty() {
            vec![Vec::new(); curve_count]
        } else {
            values.chunks(ordinates.len()).map(<[f64]>::to_vec).collect()
        };
        Self::new(ordinates, curves)
    }

    /// Set curve labels, at most one per curve
    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self> {
        if labels.len() > self.curves.len() {
            return Err(DssError::InvalidRecord(format!(
                "{} labels for {} curves",
                labels.len(),
                self.curves.len()
            )));
        }
        self.labels = labels;
        Ok(self)
    }

    /// Set independent and dependent units
    #[must_use]
    pub fn with_units(mut self, independent: impl Into<String>, dependent: impl Into<String>) -> Self {
        self.units_independent = independent.into();
        self.units_dependent = dependent.into();
        self
    }

    /// Set independent and dependent types
    #[must_use]
    pub fn with_types(mut self, independent: impl Into<String>, dependent: impl Into<String>) -> Self {
        self.type_independent = independent.into();
        self.type_dependent = dependent.into();
        self
    }

    #[must_use]
    pub fn with_time_zone_name(mut self, name: impl Into<String>) -> Self {
        self.time_zone_name = name.into();
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: DssPath) -> Self {
        self.path = Some(path);
        self
    }

    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn ordinate_count(&self) -> usize {
        self.ordinates.len()
    }

    /// Label of a curve, `value<n>` when none was given
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.labels
            .get(index)
            .filter(|label| !label.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("value{}", index + 1))
    }

    /// Curve with the given label
    #[must_use]
    pub fn curve_by_label(&self, label: &str) -> Option<&[f64]> {
        (0..self.curves.len())
            .find(|&index| self.label(index).eq_ignore_ascii_case(label))
            .map(|index| self.curves[index].as_slice())
    }

    /// All curves flattened curve after curve, as the store writes them
    #[must_use]
    pub fn flat_values(&self) -> Vec<f64> {
        self.curves.concat()
    }
}
