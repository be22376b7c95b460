//! One open DSS file
//!
//! `DssFile` owns a store handle and the catalog derived from it. The catalog is
//! built on first use and discarded after every write or delete made through the
//! handle, so the next read sees the store as it is now.

use std::time::Instant;

use crate::catalog::{Catalog, CatalogCache};
use crate::config::DssConfig;
use crate::error::{DssError, Result};
use crate::models::{DssPath, DssType, RecordType};
use crate::records::{PairedData, TextRecord};
use crate::store::{
    DssStore, IrregularStoreRequest, RegularStoreRequest, StoredPairedData, StoredTimeSeries,
    TimeWindow,
};
use crate::time::codec::{encode_boundary_time, from_calendar, times_from_encoded};
use crate::time::date_block::format_date;
use crate::time::granularity::Granularity;
use crate::timeseries::{IrregularTimeSeries, RegularTimeSeries, TimeSeries};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// A store handle together with its cached catalog
#[derive(Debug)]
pub struct DssFile<S: DssStore> {
    store: S,
    config: DssConfig,
    cache: CatalogCache,
}

impl<S: DssStore> DssFile<S> {
    /// Wrap a store with the default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, DssConfig::default())
    }

    /// Wrap a store with a custom configuration
    pub fn with_config(store: S, config: DssConfig) -> Self {
        Self {
            store,
            config,
            cache: CatalogCache::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &DssConfig {
        &self.config
    }

    /// The wrapped store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the wrapped store
    ///
    /// Changes made this way bypass the catalog; call
    /// [`invalidate_catalog`](Self::invalidate_catalog) afterwards if they add
    /// or remove records.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Release the wrapped store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Condensed catalog, built from the store on first use
    pub fn catalog(&mut self) -> Result<&Catalog> {
        let store = &mut self.store;
        let config = &self.config;
        self.cache.get_or_build(|| {
            let entries = store.catalog("")?;
            Catalog::build_with_config(&entries, config)
        })
    }

    /// Drop the cached catalog so the next read rebuilds it
    pub fn invalidate_catalog(&mut self) {
        self.cache.invalidate();
    }

    /// Number of times the catalog has been built
    #[must_use]
    pub const fn catalog_builds(&self) -> usize {
        self.cache.build_count()
    }

    /// Record type of a pathname
    ///
    /// Looked up in the catalog first; a pathname the catalog does not know is
    /// asked of the store directly. The store is also asked when the catalog
    /// cannot be built, so one unsupported record does not block every read.
    pub fn record_type(&mut self, path: &str) -> Result<RecordType> {
        let listed = match self.catalog() {
            Ok(catalog) => catalog.record_type(path),
            Err(err) => {
                log_warning(&format!("Catalog unavailable ({err}), asking the store"), Some(path));
                DssPath::parse(path, RecordType::Unknown)?;
                Err(DssError::UnknownIdentifier(path.to_string()))
            }
        };

        match listed {
            Err(DssError::UnknownIdentifier(_)) => {
                match RecordType::classify(self.store.record_type(path)) {
                    RecordType::Unknown => Err(DssError::UnknownIdentifier(path.to_string())),
                    record_type => Ok(record_type),
                }
            }
            found => found,
        }
    }

    /// Read a time series
    ///
    /// Regular records come back with their interval reconciled against the path;
    /// irregular records with their julian base date taken from the first time.
    pub fn get(&mut self, path: &str, window: &TimeWindow) -> Result<TimeSeries> {
        let record_type = self.record_type(path)?;
        if !matches!(record_type, RecordType::Regular | RecordType::Irregular) {
            return Err(DssError::NotSupported(format!(
                "reading {} records as time series ({path})",
                record_type.display_name()
            )));
        }
        let dss_path = DssPath::parse(path, record_type)?;

        log_operation_start("Retrieving", path);
        let start = Instant::now();
        let stored = self.store.retrieve_time_series(path, window)?;
        if stored.times.len() != stored.values.len() {
            return Err(DssError::InvalidTimeSeries(format!(
                "store returned {} times for {} values at {path}",
                stored.times.len(),
                stored.values.len()
            )));
        }

        let series: TimeSeries = if record_type == RecordType::Regular {
            decode_regular(stored, dss_path)?.into()
        } else {
            decode_irregular(stored, dss_path)?.into()
        };

        log_operation_complete("retrieved", path, series.len(), Some(start.elapsed()));
        Ok(series)
    }

    /// Write a time series and invalidate the catalog
    pub fn put(&mut self, series: &TimeSeries) -> Result<()> {
        let path = series
            .path()
            .ok_or_else(|| DssError::InvalidTimeSeries("series has no path".to_string()))?
            .to_string();

        log_operation_start("Storing", &path);
        let status = match series {
            TimeSeries::Regular(series) => {
                let request = self.regular_request(series, &path)?;
                self.store.store_regular(&request)
            }
            TimeSeries::Irregular(series) => {
                let request = self.irregular_request(series, &path)?;
                self.store.store_irregular(&request)
            }
        };
        self.cache.invalidate();
        check_status("store", status)?;

        log_operation_complete("stored", &path, series.len(), None);
        Ok(())
    }

    /// Read a paired-data record
    pub fn get_paired_data(&mut self, path: &str) -> Result<PairedData> {
        let dss_path = self.expect_record_type(path, RecordType::PairedData)?;
        let stored = self.store.retrieve_paired_data(path)?;

        let mut labels = stored.labels;
        labels.truncate(stored.curve_count);
        PairedData::from_flat(stored.ordinates, &stored.values, stored.curve_count)?
            .with_labels(labels)
            .map(|pd| {
                pd.with_units(stored.units_independent, stored.units_dependent)
                    .with_types(stored.type_independent, stored.type_dependent)
                    .with_time_zone_name(stored.time_zone_name)
                    .with_path(dss_path)
            })
    }

    /// Write a paired-data record and invalidate the catalog
    pub fn put_paired_data(&mut self, pd: &PairedData) -> Result<()> {
        let path = pd
            .path
            .as_ref()
            .ok_or_else(|| DssError::InvalidRecord("paired data has no path".to_string()))?
            .to_string();
        let data = StoredPairedData {
            ordinates: pd.ordinates.clone(),
            values: pd.flat_values(),
            curve_count: pd.curve_count(),
            units_independent: pd.units_independent.clone(),
            units_dependent: pd.units_dependent.clone(),
            type_independent: pd.type_independent.clone(),
            type_dependent: pd.type_dependent.clone(),
            labels: pd.labels.clone(),
            time_zone_name: pd.time_zone_name.clone(),
        };

        log_operation_start("Storing", &path);
        let status = self.store.store_paired_data(&path, &data);
        self.cache.invalidate();
        check_status("store paired data", status)?;
        log_operation_complete("stored", &path, pd.ordinate_count(), None);
        Ok(())
    }

    /// Read a text record
    pub fn get_text(&mut self, path: &str) -> Result<TextRecord> {
        let dss_path = self.expect_record_type(path, RecordType::Text)?;
        let text = self.store.retrieve_text(path)?;
        Ok(TextRecord::new(text).with_path(dss_path))
    }

    /// Write a text record and invalidate the catalog
    pub fn put_text(&mut self, record: &TextRecord) -> Result<()> {
        let path = record
            .path
            .as_ref()
            .ok_or_else(|| DssError::InvalidRecord("text record has no path".to_string()))?
            .to_string();

        let status = self.store.store_text(&path, &record.text);
        self.cache.invalidate();
        check_status("store text", status)
    }

    /// Delete a record and invalidate the catalog
    pub fn delete(&mut self, path: &str) -> Result<()> {
        let status = self.store.delete(path);
        self.cache.invalidate();
        check_status("delete", status)
    }

    fn expect_record_type(&mut self, path: &str, expected: RecordType) -> Result<DssPath> {
        let record_type = self.record_type(path)?;
        if record_type != expected {
            return Err(DssError::NotSupported(format!(
                "reading {} records as {} ({path})",
                record_type.display_name(),
                expected.display_name()
            )));
        }
        DssPath::parse(path, record_type)
    }

    fn regular_request(&self, series: &RegularTimeSeries, path: &str) -> Result<RegularStoreRequest> {
        let start = series
            .start
            .or_else(|| series.times.first().copied())
            .ok_or_else(|| DssError::InvalidTimeSeries(format!("no start time for {path}")))?;
        let (start_date, start_time) = encode_boundary_time(start);

        Ok(RegularStoreRequest {
            path: path.to_string(),
            values: series.values.clone(),
            quality: series.quality.clone(),
            start_date,
            start_time,
            units: series.units.clone(),
            data_type: data_type_token(series.data_type),
            time_zone_name: series.time_zone_name.clone(),
            save_as_float: self.config.save_as_float,
        })
    }

    fn irregular_request(
        &self,
        series: &IrregularTimeSeries,
        path: &str,
    ) -> Result<IrregularStoreRequest> {
        let base = *series
            .times
            .first()
            .ok_or_else(|| DssError::InvalidTimeSeries(format!("no times for {path}")))?;
        let granularity = write_granularity(self.config.time_granularity, series, path)?;
        let times = from_calendar(&series.times, granularity.seconds(), base)?.to_unit_counts()?;

        Ok(IrregularStoreRequest {
            path: path.to_string(),
            times,
            values: series.values.clone(),
            quality: series.quality.clone(),
            granularity_seconds: granularity.seconds(),
            base_date: format_date(base.date()),
            units: series.units.clone(),
            data_type: data_type_token(series.data_type),
            time_zone_name: series.time_zone_name.clone(),
            save_as_float: self.config.save_as_float,
        })
    }
}

/// Granularity for an irregular write
///
/// The configured granularity when every time falls on one of its units, else
/// the series' own granularity. Times neither can hold are rejected.
fn write_granularity(
    preferred: Granularity,
    series: &IrregularTimeSeries,
    path: &str,
) -> Result<Granularity> {
    [preferred, series.granularity]
        .into_iter()
        .find(|granularity| series.times.iter().all(|t| granularity.represents(*t)))
        .ok_or_else(|| {
            DssError::InvalidTimeSeries(format!(
                "times of {path} are finer than {:?} granularity; set a finer granularity on the series",
                series.granularity
            ))
        })
}

fn check_status(operation: &str, status: i32) -> Result<()> {
    if status == 0 {
        Ok(())
    } else {
        Err(DssError::store(operation, status))
    }
}

fn data_type_token(data_type: Option<DssType>) -> String {
    data_type.map(|t| t.to_string()).unwrap_or_default()
}

fn parse_data_type(token: &str, path: &str) -> Option<DssType> {
    if token.trim().is_empty() {
        return None;
    }
    match token.parse() {
        Ok(data_type) => Some(data_type),
        Err(_) => {
            log_warning(&format!("Unrecognized data type '{token}'"), Some(path));
            None
        }
    }
}

fn decode_regular(stored: StoredTimeSeries, path: DssPath) -> Result<RegularTimeSeries> {
    let times = times_from_encoded(&stored.times, stored.granularity_seconds, stored.base_day_offset)?;
    let data_type = parse_data_type(&stored.data_type, &path.to_string());

    let mut builder = RegularTimeSeries::builder(stored.values)
        .times(times)
        .quality(stored.quality)
        .units(stored.units)
        .path(path)
        .time_zone_name(stored.time_zone_name);
    if let Some(data_type) = data_type {
        builder = builder.data_type(data_type);
    }
    builder.build()
}

fn decode_irregular(stored: StoredTimeSeries, path: DssPath) -> Result<IrregularTimeSeries> {
    let times = times_from_encoded(&stored.times, stored.granularity_seconds, stored.base_day_offset)?;
    let granularity = Granularity::from_seconds(stored.granularity_seconds)?;
    let data_type = parse_data_type(&stored.data_type, &path.to_string());

    let mut series = IrregularTimeSeries::new(times, stored.values)?
        .with_quality(stored.quality)?
        .with_units(stored.units)
        .with_granularity(granularity)
        .with_time_zone_name(stored.time_zone_name)
        .with_path(path);
    series.data_type = data_type;
    Ok(series)
}
