//! Column-set validation for the dashboard dataset schemas.
//!
//! Each input file carries a documented column set. Before reading, the
//! file's header is checked against it and incompatibilities are
//! collected into a report, so a bad extract fails with the full list of
//! problems instead of the first parse error Arrow happens to hit.

use arrow::datatypes::{DataType, Schema};

/// Compatibility between a file's header and a documented dataset schema
#[derive(Debug)]
pub struct SchemaReport {
    /// Whether every documented column is present
    pub compatible: bool,
    /// Missing columns, if any
    pub issues: Vec<SchemaIssue>,
}

/// A single schema incompatibility
#[derive(Debug)]
pub struct SchemaIssue {
    /// Dataset the issue belongs to
    pub dataset: &'static str,
    /// Column the issue concerns
    pub column: String,
    /// Description of the incompatibility
    pub description: String,
}

/// Check that every documented column is present in the file schema
///
/// Column order is not significant and extra columns are ignored; only
/// absence is an issue.
#[must_use]
pub fn check_required_columns(
    dataset: &'static str,
    expected: &Schema,
    actual: &Schema,
) -> SchemaReport {
    let mut issues = Vec::new();

    for field in expected.fields() {
        if actual.field_with_name(field.name()).is_err() {
            issues.push(SchemaIssue {
                dataset,
                column: field.name().clone(),
                description: format!("column '{}' not found in file header", field.name()),
            });
        }
    }

    SchemaReport {
        compatible: issues.is_empty(),
        issues,
    }
}

/// Types of compatibility between an inferred and a documented column type
#[derive(Debug, PartialEq, Eq)]
pub enum TypeCompatibility {
    /// Types match exactly
    Exact,
    /// Types can be cast automatically
    Compatible,
    /// Types are incompatible
    Incompatible,
}

/// Check whether an inferred CSV column type can be cast onto the documented type
///
/// Schema inference reads whole-number columns as integers, so integer
/// to float is the common adaptation for the percentage columns.
#[must_use]
pub fn check_type_compatibility(from: &DataType, to: &DataType) -> TypeCompatibility {
    if from == to {
        return TypeCompatibility::Exact;
    }

    match (from, to) {
        // Integer widening
        (DataType::Int8 | DataType::Int16 | DataType::Int32, DataType::Int64)
        | (DataType::UInt8 | DataType::UInt16 | DataType::UInt32, DataType::UInt64)
        // Integer to float conversions
        | (
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32,
            DataType::Float64,
        )
        // Between string types
        | (DataType::Utf8, DataType::LargeUtf8)
        | (DataType::LargeUtf8, DataType::Utf8) => TypeCompatibility::Compatible,

        _ => TypeCompatibility::Incompatible,
    }
}
