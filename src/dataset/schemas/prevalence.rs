//! Prevalence schema definitions

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

/// Get the Arrow schema for the base prevalence extract
///
/// One row per (country, code, year) with the share of the population
/// affected by any mental or substance-use disorder.
pub fn prevalence_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("country", DataType::Utf8, false),
        Field::new("code", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("mental_disorder", DataType::Float64, false),
    ]))
}
