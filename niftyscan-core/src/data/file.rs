//! Saved-response provider.
//!
//! Reads a response body previously saved from the index endpoint. Parsing
//! rules are identical to the HTTP provider.

use super::provider::{DataError, QuoteProvider, Snapshot};
use std::path::{Path, PathBuf};

pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "json_file"
    }

    fn fetch(&self) -> Result<Snapshot, DataError> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| DataError::ReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Snapshot::parse_body(&body)
    }
}
