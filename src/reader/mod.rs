//! Module for reading CSV datasets with schema validation.
//!
//! Each extract is read through the same flow: infer the file schema
//! from the header, verify the documented columns are present, read
//! with a projection onto those columns, then cast every column to its
//! canonical type. The result is a single record batch carrying exactly
//! the documented schema, whatever the column order or numeric
//! formatting of the file.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef};
use arrow::compute::{cast, concat_batches};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::config::GbdReaderConfig;
use crate::error::util::safe_open_file;
use crate::error::{DataLoadError, Result};
use crate::schema::{TypeCompatibility, check_required_columns, check_type_compatibility};

/// Read a CSV dataset into a single record batch with the documented schema
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `dataset` - Dataset name, used in error messages
/// * `expected` - The documented schema for this dataset
/// * `config` - Reader configuration
///
/// # Returns
/// A record batch whose schema is exactly `expected`
///
/// # Errors
/// Returns an error if the file is missing, malformed, or lacks a
/// documented column
pub fn read_csv_dataset(
    path: &Path,
    dataset: &'static str,
    expected: &SchemaRef,
    config: &GbdReaderConfig,
) -> Result<RecordBatch> {
    let mut file = safe_open_file(path)?;

    let format = Format::default().with_header(true);
    let (file_schema, _) = format.infer_schema(&mut file, config.infer_rows)?;
    file.rewind().map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if config.validate_schema {
        let report = check_required_columns(dataset, expected, &file_schema);
        if !report.compatible {
            for issue in &report.issues {
                warn!("{}: {}", issue.dataset, issue.description);
            }
            let first = report
                .issues
                .into_iter()
                .next()
                .map_or_else(String::new, |issue| issue.column);
            return Err(DataLoadError::MissingColumn {
                dataset,
                column: first,
            });
        }
    }

    // Project the documented columns, in schema order
    let mut projection = Vec::with_capacity(expected.fields().len());
    for field in expected.fields() {
        match file_schema.index_of(field.name()) {
            Ok(idx) => projection.push(idx),
            Err(_) => {
                return Err(DataLoadError::MissingColumn {
                    dataset,
                    column: field.name().clone(),
                });
            }
        }
    }

    let projected = Arc::new(file_schema.project(&projection)?);
    let reader = ReaderBuilder::new(Arc::new(file_schema))
        .with_header(true)
        .with_batch_size(config.batch_size)
        .with_projection(projection)
        .build(file)?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    let raw = concat_batches(&projected, &batches)?;
    debug!(
        "{dataset}: read {} rows from {}",
        raw.num_rows(),
        path.display()
    );

    adapt_batch(dataset, &raw, expected)
}

/// Cast the inferred column types onto the documented schema
fn adapt_batch(
    dataset: &'static str,
    batch: &RecordBatch,
    expected: &SchemaRef,
) -> Result<RecordBatch> {
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(expected.fields().len());

    for (idx, field) in expected.fields().iter().enumerate() {
        let column = batch.column(idx);
        let actual = column.data_type();

        match check_type_compatibility(actual, field.data_type()) {
            TypeCompatibility::Exact => columns.push(column.clone()),
            TypeCompatibility::Compatible => {
                debug!(
                    "{dataset}: adapting column '{}' from {actual} to {}",
                    field.name(),
                    field.data_type()
                );
                columns.push(cast(column.as_ref(), field.data_type())?);
            }
            TypeCompatibility::Incompatible => {
                return Err(DataLoadError::Schema {
                    dataset,
                    message: format!(
                        "column '{}' has type {actual}, expected {}",
                        field.name(),
                        field.data_type()
                    ),
                });
            }
        }
    }

    // The documented schemas have no nullable columns; surface empty
    // cells as a schema problem rather than an opaque Arrow error.
    for (field, column) in expected.fields().iter().zip(&columns) {
        if column.null_count() > 0 {
            return Err(DataLoadError::Schema {
                dataset,
                message: format!(
                    "column '{}' contains {} empty values",
                    field.name(),
                    column.null_count()
                ),
            });
        }
    }

    Ok(RecordBatch::try_new(expected.clone(), columns)?)
}
