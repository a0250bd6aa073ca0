//! Disorder-type dataset loader implementation

use arrow::datatypes::SchemaRef;

use super::Dataset;
use super::schemas::disorder_type_schema;
use crate::config::DISORDER_TYPE_FILE;

/// Loader for the per-disorder prevalence extract
#[derive(Debug, Clone)]
pub struct DisorderTypeDataset {
    schema: SchemaRef,
}

impl DisorderTypeDataset {
    /// Create a new disorder-type dataset loader
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: disorder_type_schema(),
        }
    }
}

impl Default for DisorderTypeDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset for DisorderTypeDataset {
    fn name(&self) -> &'static str {
        "disorder_type"
    }

    fn file_name(&self) -> &'static str {
        DISORDER_TYPE_FILE
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }
}
