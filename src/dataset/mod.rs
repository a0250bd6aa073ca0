//! Dataset definitions and loaders for the dashboard extracts
//!
//! This module contains one loader per input file. Each loader carries
//! the dataset's fixed file name and documented Arrow schema and reads
//! the file through the common CSV reader, which validates the column
//! set and adapts column types.
//!
//! Available datasets:
//! - Prevalence: share of population with any mental/substance disorder
//! - `DisorderType`: prevalence broken out by disorder
//! - Gender: male/female prevalence per disorder category
//! - Dalys: disease burden attributable to mental/substance disorders
//! - `AgeBurden`: disease burden broken out by disorder and age band

pub mod schemas;

mod age;
mod dalys;
mod disorder_type;
mod gender;
mod prevalence;

pub use age::AgeBurdenDataset;
pub use dalys::DalysDataset;
pub use disorder_type::DisorderTypeDataset;
pub use gender::GenderDataset;
pub use prevalence::PrevalenceDataset;

use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::config::GbdReaderConfig;
use crate::error::Result;
use crate::reader::read_csv_dataset;

/// Base trait for dataset loaders
pub trait Dataset {
    /// Get the name of the dataset
    fn name(&self) -> &'static str;

    /// Get the fixed file name of the dataset inside the data directory
    fn file_name(&self) -> &'static str;

    /// Get the documented schema for this dataset
    fn schema(&self) -> SchemaRef;

    /// Load the dataset from the data directory
    ///
    /// # Errors
    /// Returns an error if the file is missing, malformed, or lacks a
    /// documented column
    fn load(&self, data_dir: &Path, config: &GbdReaderConfig) -> Result<RecordBatch> {
        let path = data_dir.join(self.file_name());
        read_csv_dataset(&path, self.name(), &self.schema(), config)
    }
}
