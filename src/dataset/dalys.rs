//! Disease burden dataset loader implementation

use arrow::datatypes::SchemaRef;

use super::Dataset;
use super::schemas::dalys_schema;
use crate::config::DALYS_FILE;

/// Loader for the disease burden extract
#[derive(Debug, Clone)]
pub struct DalysDataset {
    schema: SchemaRef,
}

impl DalysDataset {
    /// Create a new disease burden dataset loader
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: dalys_schema(),
        }
    }
}

impl Default for DalysDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset for DalysDataset {
    fn name(&self) -> &'static str {
        "dalys"
    }

    fn file_name(&self) -> &'static str {
        DALYS_FILE
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }
}
