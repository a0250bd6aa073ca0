//! Prevalence dataset loader implementation

use arrow::datatypes::SchemaRef;

use super::Dataset;
use super::schemas::prevalence_schema;
use crate::config::PREVALENCE_FILE;

/// Loader for the base prevalence extract
#[derive(Debug, Clone)]
pub struct PrevalenceDataset {
    schema: SchemaRef,
}

impl PrevalenceDataset {
    /// Create a new prevalence dataset loader
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: prevalence_schema(),
        }
    }
}

impl Default for PrevalenceDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset for PrevalenceDataset {
    fn name(&self) -> &'static str {
        "prevalence"
    }

    fn file_name(&self) -> &'static str {
        PREVALENCE_FILE
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }
}
