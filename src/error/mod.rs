//! Error handling for the GBD dataset reader.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;

pub mod util;

/// Specialized error type for loading the dashboard datasets
///
/// Any variant aborts the whole load; no partial table set is ever
/// exposed to the caller.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// Error opening or reading an input file
    #[error("IO error for {}: {source}", path.display())]
    Io {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error decoding CSV data or transforming record batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// A documented column is missing from an input file
    #[error("dataset '{dataset}': missing required column '{column}'")]
    MissingColumn {
        /// Name of the dataset being read
        dataset: &'static str,
        /// Name of the absent column
        column: String,
    },

    /// The file schema is incompatible with the documented schema
    #[error("dataset '{dataset}': {message}")]
    Schema {
        /// Name of the dataset being read
        dataset: &'static str,
        /// Description of the incompatibility
        message: String,
    },

    /// Error converting record batches into typed rows
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_arrow::Error),

    /// A loaded value violates a documented invariant
    #[error("dataset '{dataset}': {message}")]
    Validation {
        /// Name of the dataset being validated
        dataset: &'static str,
        /// Description of the violated invariant
        message: String,
    },
}

/// Result type for dataset loading operations
pub type Result<T> = std::result::Result<T, DataLoadError>;
