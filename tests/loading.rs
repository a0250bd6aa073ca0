//! Integration tests for dataset loading and joining.

mod common;

use std::fs;

use gbd_reader::dataset::schemas::gender_schema;
use gbd_reader::models::GenderRecord;
use gbd_reader::{DataLoadError, GbdReaderConfig, load};
use tempfile::TempDir;

fn sample_config() -> (TempDir, GbdReaderConfig) {
    let dir = TempDir::new().expect("create temp dir");
    common::write_sample_data(dir.path());
    let config = GbdReaderConfig::with_data_dir(dir.path());
    (dir, config)
}

#[test]
fn loads_and_joins_the_sample_datasets() {
    let (_dir, config) = sample_config();
    let tables = load(&config).expect("load sample data");

    // The Utopia prevalence row has no match in the other tables
    assert_eq!(tables.merged.len(), 4);
    assert_eq!(tables.dalys.len(), 4);
    assert_eq!(tables.gender.len(), 4);
    assert_eq!(tables.age.len(), 3);
    assert!(!tables.merged.iter().any(|row| row.country == "Utopia"));
}

#[test]
fn merged_row_matches_all_three_sources() {
    let (_dir, config) = sample_config();
    let tables = load(&config).expect("load sample data");

    let matches: Vec<_> = tables
        .merged
        .iter()
        .filter(|row| row.country == "Afghanistan" && row.year == 2000)
        .collect();
    assert_eq!(matches.len(), 1);

    let row = matches[0];
    assert_eq!(row.code, "AFG");
    // Whole-number column adapted from the inferred integer type
    assert_eq!(row.mental_disorder, 12.0);
    assert_eq!(row.depression, 4.5);
    assert_eq!(row.depression_male, 3.0);
    assert_eq!(row.depression_female, 6.0);
}

#[test]
fn merged_order_follows_the_prevalence_table() {
    let (_dir, config) = sample_config();
    let tables = load(&config).expect("load sample data");

    let countries: Vec<_> = tables
        .merged
        .iter()
        .map(|row| (row.country.as_str(), row.year))
        .collect();
    assert_eq!(
        countries,
        vec![
            ("Afghanistan", 2000),
            ("Afghanistan", 2019),
            ("Albania", 2019),
            ("Algeria", 2019),
        ]
    );
}

#[test]
fn missing_file_fails_with_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_sample_data(dir.path());
    fs::remove_file(dir.path().join("Dalys.csv")).expect("remove dalys file");

    let err = load(&GbdReaderConfig::with_data_dir(dir.path())).unwrap_err();
    assert!(matches!(err, DataLoadError::Io { .. }), "got {err}");
}

#[test]
fn missing_column_fails_with_typed_error() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_sample_data(dir.path());
    fs::write(
        dir.path().join("mental_substance_disorder.csv"),
        "country,code,year\nAfghanistan,AFG,2000\n",
    )
    .expect("rewrite prevalence file");

    let err = load(&GbdReaderConfig::with_data_dir(dir.path())).unwrap_err();
    match err {
        DataLoadError::MissingColumn { dataset, column } => {
            assert_eq!(dataset, "prevalence");
            assert_eq!(column, "mental_disorder");
        }
        other => panic!("expected MissingColumn, got {other}"),
    }
}

#[test]
fn non_numeric_column_fails_with_schema_error() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_sample_data(dir.path());
    fs::write(
        dir.path().join("Dalys.csv"),
        "country,code,year,dalys\nAfghanistan,AFG,2000,unknown\n",
    )
    .expect("rewrite dalys file");

    let err = load(&GbdReaderConfig::with_data_dir(dir.path())).unwrap_err();
    assert!(matches!(err, DataLoadError::Schema { dataset: "dalys", .. }), "got {err}");
}

#[test]
fn negative_value_fails_validation() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_sample_data(dir.path());
    fs::write(
        dir.path().join("Dalys.csv"),
        "country,code,year,dalys\nAfghanistan,AFG,2000,-1.0\n",
    )
    .expect("rewrite dalys file");

    let err = load(&GbdReaderConfig::with_data_dir(dir.path())).unwrap_err();
    assert!(matches!(err, DataLoadError::Validation { dataset: "dalys", .. }), "got {err}");
}

#[test]
fn out_of_range_year_fails_validation() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_sample_data(dir.path());
    fs::write(
        dir.path().join("Dalys.csv"),
        "country,code,year,dalys\nAfghanistan,AFG,1980,4.7\n",
    )
    .expect("rewrite dalys file");

    let err = load(&GbdReaderConfig::with_data_dir(dir.path())).unwrap_err();
    assert!(matches!(err, DataLoadError::Validation { dataset: "dalys", .. }), "got {err}");
}

#[test]
fn validation_can_be_disabled() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_sample_data(dir.path());
    fs::write(
        dir.path().join("Dalys.csv"),
        "country,code,year,dalys\nAfghanistan,AFG,2000,-1.0\n",
    )
    .expect("rewrite dalys file");

    let mut config = GbdReaderConfig::with_data_dir(dir.path());
    config.validate_values = false;
    let tables = load(&config).expect("load with validation disabled");
    assert_eq!(tables.dalys[0].dalys, -1.0);
}

#[test]
fn typed_rows_round_trip_through_record_batches() {
    let rows = vec![GenderRecord {
        country: "Afghanistan".to_owned(),
        code: "AFG".to_owned(),
        year: 2000,
        depression_male: 3.0,
        depression_female: 6.0,
        anxiety_male: 4.1,
        anxiety_female: 5.5,
        bipolar_male: 0.65,
        bipolar_female: 0.75,
        eating_male: 0.05,
        eating_female: 0.15,
        schizophrenia_male: 0.22,
        schizophrenia_female: 0.18,
    }];

    let schema = gender_schema();
    let batch =
        serde_arrow::to_record_batch(schema.fields(), &rows).expect("serialize gender rows");
    let decoded = GenderRecord::from_batch(&batch).expect("deserialize gender rows");
    assert_eq!(decoded, rows);
}
