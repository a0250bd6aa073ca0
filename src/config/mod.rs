//! Configuration for the GBD dataset reader.

use std::path::{Path, PathBuf};

/// File name of the base prevalence extract
pub const PREVALENCE_FILE: &str = "mental_substance_disorder.csv";
/// File name of the per-disorder prevalence extract
pub const DISORDER_TYPE_FILE: &str = "disorder_type.csv";
/// File name of the disease burden extract
pub const DALYS_FILE: &str = "Dalys.csv";
/// File name of the per-gender prevalence extract
pub const GENDER_FILE: &str = "mentalhealth_perGender.csv";
/// File name of the per-age-band burden extract
pub const AGE_FILE: &str = "Age-mental.csv";

/// Configuration for the dataset loader
#[derive(Debug, Clone)]
pub struct GbdReaderConfig {
    /// Directory containing the five CSV extracts
    pub data_dir: PathBuf,
    /// Whether to verify the documented column set before reading
    pub validate_schema: bool,
    /// Whether to check year bounds and non-negative values after reading
    pub validate_values: bool,
    /// Limit on rows sampled when inferring file schemas; `None` scans
    /// the whole file
    pub infer_rows: Option<usize>,
    /// Batch size for the CSV reader
    pub batch_size: usize,
}

impl Default for GbdReaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            validate_schema: true,
            validate_values: true,
            infer_rows: None,
            batch_size: 8192,
        }
    }
}

impl GbdReaderConfig {
    /// Create a configuration reading from the given data directory
    #[must_use]
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}
