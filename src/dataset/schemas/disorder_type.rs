//! Disorder-type schema definitions

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

/// Get the Arrow schema for the per-disorder prevalence extract
///
/// One row per (country, code, year) with one prevalence percentage per
/// tracked disorder.
pub fn disorder_type_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("country", DataType::Utf8, false),
        Field::new("code", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("schizophrenia", DataType::Float64, false),
        Field::new("bipolar_disorder", DataType::Float64, false),
        Field::new("eating_disorders", DataType::Float64, false),
        Field::new("anxiety_disorders", DataType::Float64, false),
        Field::new("drug_use_disorders", DataType::Float64, false),
        Field::new("depression", DataType::Float64, false),
        Field::new("alcohol_use_disorders", DataType::Float64, false),
    ]))
}
