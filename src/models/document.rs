// file: src/models/document.rs
// description: uploaded document payload with filename helpers
// reference: internal data structures

use crate::error::{PipelineError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(filename, bytes))
    }

    /// Filename with its last extension removed.
    pub fn base_name(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(base, _)| base)
            .unwrap_or(&self.filename)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        format!("{:x}", hasher.finalize())
    }
}
