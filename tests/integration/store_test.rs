use chrono::TimeDelta;
use dss_reader::{
    DssConfig, DssError, DssFile, DssPath, DssType, Granularity, IrregularTimeSeries, PairedData,
    RecordType, RegularTimeSeries, TextRecord, TimeSeries, TimeWindow,
};

use crate::utils::{
    IRREGULAR_CODE, MemoryStore, PAIRED_DATA_CODE, REGULAR_CODE, at, hourly_record,
};

const FLOW: &str = "//FOLSOM/FLOW/01Jan2024/1Hour/OBS/";
const RATING: &str = "/AMERICAN/FOLSOM/STAGE-FLOW///RATING/";

fn sample_file() -> dss_reader::Result<DssFile<MemoryStore>> {
    let store = MemoryStore::new()
        .with_series(FLOW, REGULAR_CODE, hourly_record(at(2024, 1, 1, 22, 0), &[10.0, 11.0, 12.5], "CFS")?)
        .with_entry(RATING, PAIRED_DATA_CODE);
    Ok(DssFile::new(store))
}

#[test]
fn test_catalog_is_cached_until_write() -> dss_reader::Result<()> {
    let mut file = sample_file()?;

    assert_eq!(file.catalog()?.len(), 2);
    assert_eq!(file.record_type(RATING)?, RecordType::PairedData);
    assert_eq!(file.catalog_builds(), 1);
    assert_eq!(file.store().catalog_calls, 1);

    file.delete(RATING)?;
    assert_eq!(file.catalog()?.paths(), vec![FLOW]);
    assert_eq!(file.catalog_builds(), 2);
    Ok(())
}

#[test]
fn test_get_regular_series() -> dss_reader::Result<()> {
    let mut file = sample_file()?;
    let window = TimeWindow::new(at(2024, 1, 1, 0, 0), at(2024, 1, 2, 0, 0));
    let series = file.get(FLOW, &window)?;

    let regular = series.as_regular().unwrap();
    assert_eq!(
        regular.times,
        vec![at(2024, 1, 1, 22, 0), at(2024, 1, 1, 23, 0), at(2024, 1, 2, 0, 0)]
    );
    assert_eq!(regular.values, vec![10.0, 11.0, 12.5]);
    assert_eq!(regular.units, "CFS");
    assert_eq!(regular.data_type, Some(DssType::InstVal));
    assert_eq!(regular.interval.map(|i| i.seconds()), Some(3600));
    assert_eq!(regular.path.as_ref().map(DssPath::record_type), Some(RecordType::Regular));

    assert_eq!(file.store().last_window, Some(window));
    assert_eq!(
        window.end_tokens(),
        Some(("01Jan2024".to_string(), "24:00".to_string()))
    );
    Ok(())
}

#[test]
fn test_get_unknown_and_non_time_series() -> dss_reader::Result<()> {
    let mut file = sample_file()?;
    assert!(matches!(
        file.get("//NOWHERE/FLOW/01Jan2024/1Hour/OBS/", &TimeWindow::all()),
        Err(DssError::UnknownIdentifier(_))
    ));
    assert!(matches!(
        file.get(RATING, &TimeWindow::all()),
        Err(DssError::NotSupported(_))
    ));
    Ok(())
}

#[test]
fn test_put_regular_series_round_trip() -> dss_reader::Result<()> {
    let mut file = DssFile::new(MemoryStore::new());
    let series = RegularTimeSeries::builder(vec![1.0, 2.0, 3.0, 4.0])
        .start(at(2024, 6, 2, 0, 0))
        .path("//FOLSOM/STAGE//15Minute/OBS/".parse()?)
        .units("FT")
        .data_type(DssType::InstVal)
        .build()?;
    file.put(&series.into())?;

    let request = file.store().last_regular.clone().unwrap();
    assert_eq!(request.start_date, "01Jun2024");
    assert_eq!(request.start_time, "24:00");
    assert_eq!(request.data_type, "INST-VAL");

    let stored = "//FOLSOM/STAGE/02Jun2024/15Minute/OBS/";
    assert_eq!(file.catalog()?.paths(), vec![stored]);
    let back = file.get(stored, &TimeWindow::all())?;
    assert_eq!(back.times()[0], at(2024, 6, 2, 0, 0));
    assert_eq!(back.times()[3], at(2024, 6, 2, 0, 45));
    assert_eq!(back.values(), &[1.0, 2.0, 3.0, 4.0]);
    Ok(())
}

#[test]
fn test_put_irregular_series_round_trip() -> dss_reader::Result<()> {
    let config = DssConfig::new().with_time_granularity(Granularity::Second);
    let mut file = DssFile::with_config(MemoryStore::new(), config);
    let times = vec![at(2024, 2, 28, 23, 59), at(2024, 2, 29, 0, 1), at(2024, 3, 1, 12, 0)];
    let series = IrregularTimeSeries::new(times.clone(), vec![5.0, 6.0, 7.0])?
        .with_path("//FOLSOM/PRECIP//IR-Month/GAGE/".parse()?);
    file.put(&TimeSeries::from(series))?;

    let request = file.store().last_irregular.clone().unwrap();
    assert_eq!(request.granularity_seconds, 1);
    assert_eq!(request.base_date, "28Feb2024");
    assert_eq!(request.times, vec![86_340, 86_460, 216_000]);

    let stored = "//FOLSOM/PRECIP/28Feb2024/IR-Month/GAGE/";
    assert_eq!(file.record_type(stored)?, RecordType::Irregular);
    let back = file.get(stored, &TimeWindow::all())?;
    let irregular = back.as_irregular().unwrap();
    assert_eq!(irregular.times, times);
    assert_eq!(irregular.granularity, Granularity::Second);
    assert_eq!(file.into_inner().paths(), vec![stored]);
    Ok(())
}

#[test]
fn test_store_status_becomes_error() -> dss_reader::Result<()> {
    let mut file = sample_file()?;
    file.catalog()?;

    let mut store = file.into_inner();
    store.fail_writes_with = Some(-7);
    let mut file = DssFile::new(store);
    let series = IrregularTimeSeries::new(vec![at(2024, 1, 1, 0, 0)], vec![1.0])?
        .with_path("//A/B//IR-Day/C/".parse()?);

    let err = file.put(&series.into()).unwrap_err();
    assert!(matches!(err, DssError::Store { status: -7, .. }));

    assert!(matches!(
        file.delete("//NOT/THERE////"),
        Err(DssError::Store { .. })
    ));
    Ok(())
}

#[test]
fn test_put_requires_path() -> dss_reader::Result<()> {
    let mut file = sample_file()?;
    let series = IrregularTimeSeries::new(vec![at(2024, 1, 1, 0, 0)], vec![1.0])?;
    assert!(matches!(
        file.put(&series.into()),
        Err(DssError::InvalidTimeSeries(_))
    ));
    Ok(())
}

#[test]
fn test_record_type_falls_back_to_store() -> dss_reader::Result<()> {
    let mut file = sample_file()?;
    file.catalog()?;

    // written by another handle after the catalog was built
    let late = "//FOLSOM/PRECIP/01Feb2024/IR-Month/GAGE/";
    file.store_mut().add_entry(late, IRREGULAR_CODE);
    assert_eq!(file.record_type(late)?, RecordType::Irregular);
    assert_eq!(file.catalog_builds(), 1);

    assert_eq!(
        file.record_type("//SOMEWHERE/ELSE/01Jan2024/1Hour/OBS/").unwrap_err().to_string(),
        "Unknown identifier: //SOMEWHERE/ELSE/01Jan2024/1Hour/OBS/"
    );

    file.invalidate_catalog();
    assert_eq!(file.catalog()?.len(), 3);
    Ok(())
}

#[test]
fn test_unsupported_record_does_not_block_reads() -> dss_reader::Result<()> {
    let store = MemoryStore::new()
        .with_series(FLOW, REGULAR_CODE, hourly_record(at(2024, 1, 1, 0, 0), &[1.0, 2.0], "CFS")?)
        .with_entry("/A/B/TIN////", 450);
    let mut file = DssFile::new(store);

    assert!(matches!(
        file.catalog(),
        Err(DssError::UnsupportedRecordType { .. })
    ));
    assert_eq!(file.record_type(FLOW)?, RecordType::Regular);
    let series = file.get(FLOW, &TimeWindow::all())?;
    assert_eq!(series.values(), &[1.0, 2.0]);
    assert!(matches!(
        file.record_type("//NOWHERE/FLOW/01Jan2024/1Hour/OBS/"),
        Err(DssError::UnknownIdentifier(_))
    ));
    assert!(matches!(file.record_type("not a path"), Err(DssError::InvalidPath(_))));
    Ok(())
}

#[test]
fn test_irregular_seconds_are_not_truncated() -> dss_reader::Result<()> {
    let mut file = DssFile::new(MemoryStore::new());
    let times = vec![
        at(2024, 1, 1, 10, 0) + TimeDelta::seconds(30),
        at(2024, 1, 1, 10, 1) + TimeDelta::seconds(15),
    ];
    let series = IrregularTimeSeries::new(times.clone(), vec![1.0, 2.0])?
        .with_granularity(Granularity::Second)
        .with_path("//FOLSOM/GATE//IR-Day/OPS/".parse()?);
    file.put(&series.into())?;

    assert_eq!(file.store().last_irregular.as_ref().map(|r| r.granularity_seconds), Some(1));
    let back = file.get("//FOLSOM/GATE/01Jan2024/IR-Day/OPS/", &TimeWindow::all())?;
    assert_eq!(back.times(), times.as_slice());
    Ok(())
}

#[test]
fn test_irregular_times_finer_than_granularity_are_rejected() -> dss_reader::Result<()> {
    let mut file = DssFile::new(MemoryStore::new());
    let series = IrregularTimeSeries::new(vec![at(2024, 1, 1, 10, 0) + TimeDelta::seconds(30)], vec![1.0])?
        .with_granularity(Granularity::Minute)
        .with_path("//FOLSOM/GATE//IR-Day/OPS/".parse()?);

    assert!(matches!(
        file.put(&series.into()),
        Err(DssError::InvalidTimeSeries(_))
    ));
    assert!(file.store().last_irregular.is_none());
    Ok(())
}

#[test]
fn test_irregular_day_granularity_round_trip() -> dss_reader::Result<()> {
    let config = DssConfig::new().with_time_granularity(Granularity::Day);
    let mut file = DssFile::with_config(MemoryStore::new(), config);
    let times = vec![at(2023, 12, 30, 0, 0), at(2024, 1, 2, 0, 0), at(2024, 3, 1, 0, 0)];
    let series = IrregularTimeSeries::new(times.clone(), vec![3.0, 4.0, 5.0])?
        .with_path("//FOLSOM/SURVEY//IR-Year/LAB/".parse()?);
    file.put(&series.into())?;

    let request = file.store().last_irregular.clone().unwrap();
    assert_eq!(request.granularity_seconds, 86_400);
    assert_eq!(request.times, vec![0, 3, 62]);

    let back = file.get("//FOLSOM/SURVEY/30Dec2023/IR-Year/LAB/", &TimeWindow::all())?;
    let irregular = back.as_irregular().unwrap();
    assert_eq!(irregular.times, times);
    assert_eq!(irregular.granularity, Granularity::Day);
    Ok(())
}

#[test]
fn test_paired_data_round_trip() -> dss_reader::Result<()> {
    let mut file = sample_file()?;
    let rating = PairedData::new(
        vec![100.0, 101.0, 102.0],
        vec![vec![0.0, 50.0, 200.0], vec![0.0, 45.0, 190.0]],
    )?
    .with_labels(vec!["2019".to_string(), "2023".to_string()])?
    .with_units("FT", "CFS")
    .with_types("UNT", "UNT")
    .with_path(RATING.parse()?);
    file.put_paired_data(&rating)?;

    assert_eq!(file.record_type(RATING)?, RecordType::PairedData);
    let back = file.get_paired_data(RATING)?;
    assert_eq!(back.curves, rating.curves);
    assert_eq!(back.ordinates, rating.ordinates);
    assert_eq!(back.curve_by_label("2023"), Some(&[0.0, 45.0, 190.0][..]));
    assert_eq!(back.units_dependent, "CFS");
    assert_eq!(back.path.as_ref().map(DssPath::record_type), Some(RecordType::PairedData));

    assert!(matches!(file.get_paired_data(FLOW), Err(DssError::NotSupported(_))));
    Ok(())
}

#[test]
fn test_text_round_trip() -> dss_reader::Result<()> {
    let mut file = sample_file()?;
    let path = "/AMERICAN/FOLSOM/NOTES///OPS/";
    let note = TextRecord::new("Gate 3 closed\nSpillway inspected").with_path(path.parse()?);
    file.put_text(&note)?;

    assert_eq!(file.catalog()?.len(), 3);
    assert_eq!(file.store().paths().last().map(String::as_str), Some(path));
    assert_eq!(file.record_type(path)?, RecordType::Text);
    let back = file.get_text(path)?;
    assert_eq!(back.lines().collect::<Vec<_>>(), vec!["Gate 3 closed", "Spillway inspected"]);
    assert_eq!(back.to_string(), note.text);

    assert!(matches!(
        file.put_text(&TextRecord::new("no path")),
        Err(DssError::InvalidRecord(_))
    ));
    assert!(matches!(file.get_text(RATING), Err(DssError::NotSupported(_))));
    Ok(())
}
