use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use dss_reader::catalog::RawCatalogEntry;
use dss_reader::store::{IrregularStoreRequest, RegularStoreRequest};
use dss_reader::time::codec::store_day_number;
use dss_reader::time::date_block::{format_date, parse_date_block};
use dss_reader::{
    DssError, DssPath, DssStore, Granularity, Result, StoredPairedData, StoredTimeSeries, TimeWindow,
    decode_boundary_time, from_calendar, generate_times, interval_to_seconds,
};

/// Record type code the memory store uses for regular series
pub const REGULAR_CODE: i32 = 105;
/// Record type code the memory store uses for irregular series
pub const IRREGULAR_CODE: i32 = 115;
/// Record type code for paired data
pub const PAIRED_DATA_CODE: i32 = 205;
/// Record type code for text
pub const TEXT_CODE: i32 = 300;

/// Status returned by the memory store for a missing record
pub const NOT_FOUND: i32 = -1;

#[derive(Debug, Clone, Default)]
struct MemoryRecord {
    code: i32,
    data: StoredTimeSeries,
    paired: StoredPairedData,
    text: String,
}

/// In-memory stand-in for the native store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: IndexMap<String, MemoryRecord>,
    /// Number of catalog listings served
    pub catalog_calls: usize,
    /// Status every write returns instead of succeeding
    pub fail_writes_with: Option<i32>,
    pub last_window: Option<TimeWindow>,
    pub last_regular: Option<RegularStoreRequest>,
    pub last_irregular: Option<IrregularStoreRequest>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record without data (paired data, grids, ...)
    #[must_use]
    pub fn with_entry(mut self, path: &str, code: i32) -> Self {
        self.add_entry(path, code);
        self
    }

    /// Add a record without data to an existing store
    pub fn add_entry(&mut self, path: &str, code: i32) {
        self.records.insert(
            path.to_string(),
            MemoryRecord {
                code,
                ..MemoryRecord::default()
            },
        );
    }

    /// Add a time-series record
    #[must_use]
    pub fn with_series(mut self, path: &str, code: i32, data: StoredTimeSeries) -> Self {
        self.records.insert(
            path.to_string(),
            MemoryRecord {
                code,
                data,
                ..MemoryRecord::default()
            },
        );
        self
    }

    /// Pathnames currently held, in insertion order
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    fn insert_regular(&mut self, request: &RegularStoreRequest) -> Result<()> {
        let mut path: DssPath = request.path.parse()?;
        let start = decode_boundary_time(&request.start_date, &request.start_time)?;
        let interval = interval_to_seconds(path.e())?;
        let times = generate_times(start, request.values.len(), interval)?;
        let encoded = from_calendar(&times, Granularity::Minute.seconds(), start)?;

        path.set_d(format_date(start.date()));
        let data = StoredTimeSeries {
            times: encoded.to_unit_counts()?,
            values: request.values.clone(),
            granularity_seconds: Granularity::Minute.seconds(),
            base_day_offset: encoded.base_day_offset,
            quality: request.quality.clone(),
            units: request.units.clone(),
            data_type: request.data_type.clone(),
            time_zone_name: request.time_zone_name.clone(),
        };
        self.records.insert(
            path.to_string(),
            MemoryRecord {
                code: REGULAR_CODE,
                data,
                ..MemoryRecord::default()
            },
        );
        Ok(())
    }

    fn insert_irregular(&mut self, request: &IrregularStoreRequest) -> Result<()> {
        let mut path: DssPath = request.path.parse()?;
        let base = parse_date_block(&request.base_date)
            .ok_or_else(|| DssError::InvalidDate(request.base_date.clone()))?;
        let base_day_offset = i32::try_from(store_day_number(base))
            .map_err(|_| DssError::InvalidDate(request.base_date.clone()))?;

        path.set_d(request.base_date.clone());
        let data = StoredTimeSeries {
            times: request.times.clone(),
            values: request.values.clone(),
            granularity_seconds: request.granularity_seconds,
            base_day_offset,
            quality: request.quality.clone(),
            units: request.units.clone(),
            data_type: request.data_type.clone(),
            time_zone_name: request.time_zone_name.clone(),
        };
        self.records.insert(
            path.to_string(),
            MemoryRecord {
                code: IRREGULAR_CODE,
                data,
                ..MemoryRecord::default()
            },
        );
        Ok(())
    }
}

impl DssStore for MemoryStore {
    fn catalog(&mut self, filter: &str) -> Result<Vec<RawCatalogEntry>> {
        self.catalog_calls += 1;
        Ok(self
            .records
            .iter()
            .filter(|(path, _)| filter.is_empty() || path.contains(filter))
            .map(|(path, record)| RawCatalogEntry::new(path.clone(), record.code))
            .collect())
    }

    fn retrieve_time_series(&mut self, path: &str, window: &TimeWindow) -> Result<StoredTimeSeries> {
        self.last_window = Some(*window);
        self.records
            .get(path)
            .map(|record| record.data.clone())
            .ok_or_else(|| DssError::store("retrieve", NOT_FOUND))
    }

    fn store_regular(&mut self, request: &RegularStoreRequest) -> i32 {
        self.last_regular = Some(request.clone());
        if let Some(status) = self.fail_writes_with {
            return status;
        }
        match self.insert_regular(request) {
            Ok(()) => 0,
            Err(_) => NOT_FOUND,
        }
    }

    fn store_irregular(&mut self, request: &IrregularStoreRequest) -> i32 {
        self.last_irregular = Some(request.clone());
        if let Some(status) = self.fail_writes_with {
            return status;
        }
        match self.insert_irregular(request) {
            Ok(()) => 0,
            Err(_) => NOT_FOUND,
        }
    }

    fn retrieve_paired_data(&mut self, path: &str) -> Result<StoredPairedData> {
        self.records
            .get(path)
            .map(|record| record.paired.clone())
            .ok_or_else(|| DssError::store("pdRetrieve", NOT_FOUND))
    }

    fn store_paired_data(&mut self, path: &str, data: &StoredPairedData) -> i32 {
        if let Some(status) = self.fail_writes_with {
            return status;
        }
        self.records.insert(
            path.to_string(),
            MemoryRecord {
                code: PAIRED_DATA_CODE,
                paired: data.clone(),
                ..MemoryRecord::default()
            },
        );
        0
    }

    fn retrieve_text(&mut self, path: &str) -> Result<String> {
        self.records
            .get(path)
            .map(|record| record.text.clone())
            .ok_or_else(|| DssError::store("textRetrieve", NOT_FOUND))
    }

    fn store_text(&mut self, path: &str, text: &str) -> i32 {
        if let Some(status) = self.fail_writes_with {
            return status;
        }
        self.records.insert(
            path.to_string(),
            MemoryRecord {
                code: TEXT_CODE,
                text: text.to_string(),
                ..MemoryRecord::default()
            },
        );
        0
    }

    fn delete(&mut self, path: &str) -> i32 {
        if self.records.shift_remove(path).is_some() {
            0
        } else {
            NOT_FOUND
        }
    }

    fn record_type(&mut self, path: &str) -> i32 {
        self.records.get(path).map_or(0, |record| record.code)
    }
}

/// Timestamp helper
#[must_use]
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Hourly record at minute granularity starting at `start`
pub fn hourly_record(start: NaiveDateTime, values: &[f64], units: &str) -> Result<StoredTimeSeries> {
    let times = generate_times(start, values.len(), 3600)?;
    let encoded = from_calendar(&times, Granularity::Minute.seconds(), start)?;
    Ok(StoredTimeSeries {
        times: encoded.to_unit_counts()?,
        values: values.to_vec(),
        granularity_seconds: Granularity::Minute.seconds(),
        base_day_offset: encoded.base_day_offset,
        quality: Vec::new(),
        units: units.to_string(),
        data_type: "INST-VAL".to_string(),
        time_zone_name: String::new(),
    })
}
