//! Disease burden schema definitions

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

/// Get the Arrow schema for the disease burden extract
///
/// One row per (country, code, year) with the share of total disease
/// burden (DALYs) attributable to mental and substance-use disorders.
pub fn dalys_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("country", DataType::Utf8, false),
        Field::new("code", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("dalys", DataType::Float64, false),
    ]))
}
