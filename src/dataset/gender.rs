//! Per-gender dataset loader implementation

use arrow::datatypes::SchemaRef;

use super::Dataset;
use super::schemas::gender_schema;
use crate::config::GENDER_FILE;

/// Loader for the per-gender prevalence extract
#[derive(Debug, Clone)]
pub struct GenderDataset {
    schema: SchemaRef,
}

impl GenderDataset {
    /// Create a new per-gender dataset loader
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: gender_schema(),
        }
    }
}

impl Default for GenderDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset for GenderDataset {
    fn name(&self) -> &'static str {
        "gender"
    }

    fn file_name(&self) -> &'static str {
        GENDER_FILE
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }
}
