use dss_reader::{Catalog, DssConfig, DssError, RawCatalogEntry, RecordType};

fn listing() -> Vec<RawCatalogEntry> {
    vec![
        RawCatalogEntry::new("//SACRAMENTO/FLOW/01Jan1989/1Day/OBS/", 100),
        RawCatalogEntry::new("/BASIN/FOLSOM/STAGE-FLOW///RATING/", 205),
        RawCatalogEntry::new("//SACRAMENTO/FLOW/01Jan1990/1Day/OBS/", 100),
        RawCatalogEntry::new("//SACRAMENTO/PRECIP/01Jan1990/IR-Year/GAGE/", 110),
        RawCatalogEntry::new("//SACRAMENTO/FLOW/01Jan1991/1Day/OBS/", 100),
        RawCatalogEntry::new("//SACRAMENTO/FLOW/bad/1Day/OBS/", 100),
        RawCatalogEntry::new("//SACRAMENTO/PRECIP/01Jan1980/IR-Year/GAGE/", 110),
    ]
}

#[test]
fn test_condensed_listing() -> dss_reader::Result<()> {
    let catalog = Catalog::build(&listing())?;

    assert_eq!(
        catalog.paths(),
        vec![
            "/BASIN/FOLSOM/STAGE-FLOW///RATING/",
            "//SACRAMENTO/FLOW/01Jan1989 - 01Jan1991/1Day/OBS/",
            "//SACRAMENTO/PRECIP/01Jan1980 - 01Jan1990/IR-Year/GAGE/",
        ]
    );
    assert_eq!(catalog.skipped(), 1);
    Ok(())
}

#[test]
fn test_condensed_listing_as_json() -> dss_reader::Result<()> {
    let catalog = Catalog::build(&listing())?;
    let json = serde_json::to_string(catalog.items()).unwrap();

    assert_eq!(
        json,
        concat!(
            r#"[{"path":"/BASIN/FOLSOM/STAGE-FLOW///RATING/","record_type":"PairedData"},"#,
            r#"{"path":"//SACRAMENTO/FLOW/01Jan1989 - 01Jan1991/1Day/OBS/","record_type":"Regular"},"#,
            r#"{"path":"//SACRAMENTO/PRECIP/01Jan1980 - 01Jan1990/IR-Year/GAGE/","record_type":"Irregular"}]"#
        )
    );
    Ok(())
}

#[test]
fn test_lookup_on_condensed_catalog() -> dss_reader::Result<()> {
    let catalog = Catalog::build(&listing())?;

    assert_eq!(
        catalog.record_type("//SACRAMENTO/FLOW/01Jan1989 - 01Jan1991/1Day/OBS/")?,
        RecordType::Regular
    );
    assert_eq!(
        catalog.record_type("//SACRAMENTO/FLOW/01Jan1990/1Day/OBS/")?,
        RecordType::Regular
    );
    assert_eq!(
        catalog.record_type("//sacramento/precip/01Jan2050/ir-year/gage/")?,
        RecordType::Irregular
    );
    assert!(matches!(
        catalog.record_type("//FOLSOM/FLOW/01Jan1990/1Day/OBS/"),
        Err(DssError::UnknownIdentifier(_))
    ));
    Ok(())
}

#[test]
fn test_skipped_entries_without_warnings() -> dss_reader::Result<()> {
    let config = DssConfig::new().with_log_skipped_entries(false);
    let catalog = Catalog::build_with_config(&listing(), &config)?;
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.skipped(), 1);
    Ok(())
}

#[test]
fn test_empty_listing() -> dss_reader::Result<()> {
    let catalog = Catalog::build(&[])?;
    assert!(catalog.is_empty());
    assert!(catalog.type_counts().is_empty());
    Ok(())
}

#[test]
fn test_tin_aborts_the_build() {
    let mut entries = listing();
    entries.push(RawCatalogEntry::new("/A/B/ELEV///TIN/", 450));

    let err = Catalog::build(&entries).unwrap_err();
    assert!(matches!(err, DssError::UnsupportedRecordType { .. }));
    assert!(err.to_string().contains("/A/B/ELEV///TIN/"));
}

#[test]
fn test_print_catalog() -> dss_reader::Result<()> {
    dss_reader::init_logging();
    let catalog = Catalog::build(&listing())?;
    dss_reader::utils::logging::print_catalog(&catalog);
    dss_reader::utils::logging::print_catalog_summary(&catalog);
    assert_eq!(
        catalog.type_counts(),
        vec![(RecordType::PairedData, 1), (RecordType::Regular, 1), (RecordType::Irregular, 1)]
    );
    Ok(())
}
