//! Utility functions for error handling
//!
//! Path checks run before the actual IO so failures carry the offending
//! path instead of a bare OS error.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DataLoadError, Result};

/// Safely open an input file with rich error information
pub fn safe_open_file(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(DataLoadError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        });
    }

    if !path.is_file() {
        return Err(DataLoadError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path is not a file"),
        });
    }

    fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that the data directory exists and is readable
pub fn validate_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() || !dir.is_dir() {
        return Err(DataLoadError::Io {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "data directory not found"),
        });
    }

    fs::read_dir(dir)
        .map(|_| ())
        .map_err(|source| DataLoadError::Io {
            path: dir.to_path_buf(),
            source,
        })
}
