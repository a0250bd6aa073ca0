//! Per-age-band dataset loader implementation

use arrow::datatypes::SchemaRef;

use super::Dataset;
use super::schemas::age_schema;
use crate::config::AGE_FILE;

/// Loader for the per-age-band burden extract
#[derive(Debug, Clone)]
pub struct AgeBurdenDataset {
    schema: SchemaRef,
}

impl AgeBurdenDataset {
    /// Create a new per-age-band dataset loader
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: age_schema(),
        }
    }
}

impl Default for AgeBurdenDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset for AgeBurdenDataset {
    fn name(&self) -> &'static str {
        "age_burden"
    }

    fn file_name(&self) -> &'static str {
        AGE_FILE
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }
}
