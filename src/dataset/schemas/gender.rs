//! Per-gender prevalence schema definitions

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

/// Get the Arrow schema for the per-gender prevalence extract
///
/// One row per (country, code, year) with male and female prevalence for
/// each of the five gender-split categories.
pub fn gender_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("country", DataType::Utf8, false),
        Field::new("code", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("depression_male", DataType::Float64, false),
        Field::new("depression_female", DataType::Float64, false),
        Field::new("anxiety_male", DataType::Float64, false),
        Field::new("anxiety_female", DataType::Float64, false),
        Field::new("bipolar_male", DataType::Float64, false),
        Field::new("bipolar_female", DataType::Float64, false),
        Field::new("eating_male", DataType::Float64, false),
        Field::new("eating_female", DataType::Float64, false),
        Field::new("schizophrenia_male", DataType::Float64, false),
        Field::new("schizophrenia_female", DataType::Float64, false),
    ]))
}
