//! Loading and joining of the five dashboard datasets.

use std::time::Instant;

use log::info;

use crate::config::GbdReaderConfig;
use crate::dataset::{
    AgeBurdenDataset, DalysDataset, Dataset, DisorderTypeDataset, GenderDataset,
    PrevalenceDataset,
};
use crate::error::util::validate_data_dir;
use crate::error::{DataLoadError, Result};
use crate::join::merge_tables;
use crate::models::{
    AgeBurdenRecord, DalysRecord, Disorder, DisorderTypeRecord, GenderRecord, MAX_YEAR,
    MIN_YEAR, MergedRecord, PrevalenceRecord,
};

/// The four read-only tables the dashboard queries
///
/// Loaded once at startup and never mutated afterwards; every chart is
/// derived from borrowed slices of these tables.
#[derive(Debug, Clone)]
pub struct DashboardTables {
    /// Inner join of the prevalence, disorder-type, and per-gender tables
    pub merged: Vec<MergedRecord>,
    /// Disease burden by (country, code, year)
    pub dalys: Vec<DalysRecord>,
    /// Per-gender prevalence by (country, code, year)
    pub gender: Vec<GenderRecord>,
    /// Per-age-band burden by (country, year)
    pub age: Vec<AgeBurdenRecord>,
}

/// Load the five datasets and derive the merged table
///
/// # Errors
/// Any I/O, schema, or validation failure aborts the whole load; no
/// partial table set is returned.
pub fn load(config: &GbdReaderConfig) -> Result<DashboardTables> {
    validate_data_dir(&config.data_dir)?;
    let start = Instant::now();

    let batch = PrevalenceDataset::new().load(&config.data_dir, config)?;
    let prevalence = PrevalenceRecord::from_batch(&batch)?;

    let batch = DisorderTypeDataset::new().load(&config.data_dir, config)?;
    let types = DisorderTypeRecord::from_batch(&batch)?;

    let batch = GenderDataset::new().load(&config.data_dir, config)?;
    let gender = GenderRecord::from_batch(&batch)?;

    let batch = DalysDataset::new().load(&config.data_dir, config)?;
    let dalys = DalysRecord::from_batch(&batch)?;

    let batch = AgeBurdenDataset::new().load(&config.data_dir, config)?;
    let age = AgeBurdenRecord::from_batch(&batch)?;

    if config.validate_values {
        validate_rows("prevalence", &prevalence, |row| row.year, |row| {
            vec![("mental_disorder", row.mental_disorder)]
        })?;
        validate_rows("disorder_type", &types, |row| row.year, |row| {
            Disorder::ALL
                .iter()
                .map(|&disorder| (disorder.column(), row.value(disorder)))
                .collect()
        })?;
        validate_rows("gender", &gender, |row| row.year, |row| {
            vec![
                ("depression_male", row.depression_male),
                ("depression_female", row.depression_female),
                ("anxiety_male", row.anxiety_male),
                ("anxiety_female", row.anxiety_female),
                ("bipolar_male", row.bipolar_male),
                ("bipolar_female", row.bipolar_female),
                ("eating_male", row.eating_male),
                ("eating_female", row.eating_female),
                ("schizophrenia_male", row.schizophrenia_male),
                ("schizophrenia_female", row.schizophrenia_female),
            ]
        })?;
        validate_rows("dalys", &dalys, |row| row.year, |row| {
            vec![("dalys", row.dalys)]
        })?;
        validate_rows("age_burden", &age, |row| row.year, age_values)?;
    }

    let merged = merge_tables(&prevalence, &types, &gender);
    info!(
        "loaded {} merged, {} dalys, {} gender, {} age rows in {:?}",
        merged.len(),
        dalys.len(),
        gender.len(),
        age.len(),
        start.elapsed()
    );

    Ok(DashboardTables {
        merged,
        dalys,
        gender,
        age,
    })
}

/// Check year bounds and non-negativity for every row of one table
fn validate_rows<T>(
    dataset: &'static str,
    rows: &[T],
    year: impl Fn(&T) -> i64,
    values: impl Fn(&T) -> Vec<(&'static str, f64)>,
) -> Result<()> {
    for (idx, row) in rows.iter().enumerate() {
        let row_year = year(row);
        if !(MIN_YEAR..=MAX_YEAR).contains(&row_year) {
            return Err(DataLoadError::Validation {
                dataset,
                message: format!(
                    "row {idx}: year {row_year} outside {MIN_YEAR}..={MAX_YEAR}"
                ),
            });
        }

        for (column, value) in values(row) {
            if value < 0.0 {
                return Err(DataLoadError::Validation {
                    dataset,
                    message: format!("row {idx}: negative value {value} in column '{column}'"),
                });
            }
        }
    }

    Ok(())
}

fn age_values(row: &AgeBurdenRecord) -> Vec<(&'static str, f64)> {
    use crate::models::DisorderCategory;

    let mut values = Vec::with_capacity(23);
    for category in DisorderCategory::ALL {
        for &band in category.age_bands() {
            if let Some(value) = row.band(category, band) {
                values.push((category.label(), value));
            }
        }
    }
    values
}
