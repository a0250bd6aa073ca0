//! Per-age-band burden schema definitions

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

/// Get the Arrow schema for the per-age-band burden extract
///
/// One row per (country, year). Column headers carry the source's
/// original labels; the eating and bipolar series start at the 5-14
/// band.
pub fn age_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("country", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("Anxiety- age: <5", DataType::Float64, false),
        Field::new("Anxiety- age: 5-14", DataType::Float64, false),
        Field::new("Anxiety- age: 15-49", DataType::Float64, false),
        Field::new("Anxiety- age: 50-69", DataType::Float64, false),
        Field::new("Anxiety- age: 70+", DataType::Float64, false),
        Field::new("depression- age: <5", DataType::Float64, false),
        Field::new("depression- age: 5-14", DataType::Float64, false),
        Field::new("depression- age: 15-49", DataType::Float64, false),
        Field::new("depression- age: 50-69", DataType::Float64, false),
        Field::new("depression- age: 70+", DataType::Float64, false),
        Field::new("Schiz- age: <5", DataType::Float64, false),
        Field::new("Schiz- age: 5-14", DataType::Float64, false),
        Field::new("Schiz- age: 15-49", DataType::Float64, false),
        Field::new("Schiz- age: 50-69", DataType::Float64, false),
        Field::new("Schiz- age: 70+", DataType::Float64, false),
        Field::new("bipolar- age: 5-14", DataType::Float64, false),
        Field::new("bipolar- age: 15-49", DataType::Float64, false),
        Field::new("bipolar- age: 50-69", DataType::Float64, false),
        Field::new("bipolar- age: 70+", DataType::Float64, false),
        Field::new("eating- age: 5-14", DataType::Float64, false),
        Field::new("eating- age: 15-49", DataType::Float64, false),
        Field::new("eating- age: 50-69", DataType::Float64, false),
        Field::new("eating- age: 70+", DataType::Float64, false),
    ]))
}
