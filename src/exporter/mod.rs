// file: src/exporter/mod.rs
// description: frequency table export to spreadsheet, csv and manifest files
// reference: internal module structure

pub mod csv;
pub mod json;
pub mod xlsx;

pub use self::csv::CsvExporter;
pub use json::ExportManifest;
pub use xlsx::SpreadsheetExporter;

use crate::config::ExportConfig;
use crate::error::{PipelineError, Result};
use crate::models::FrequencyTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const FILE_SUFFIX: &str = "_words";

#[derive(Debug, Clone)]
pub struct ExportFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct ExportArtifacts {
    pub files: Vec<ExportFile>,
}

impl ExportArtifacts {
    pub fn push(&mut self, name: String, bytes: Vec<u8>) {
        self.files.push(ExportFile { name, bytes });
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ExportFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn write_to(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|source| PipelineError::FileOperation {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = output_dir.join(&file.name);
            fs::write(&path, &file.bytes).map_err(|source| PipelineError::FileOperation {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {} ({} bytes)", path.display(), file.bytes.len());
            written.push(path);
        }

        Ok(written)
    }
}

pub fn export_file_name(base_name: &str, extension: &str) -> String {
    format!("{base_name}{FILE_SUFFIX}.{extension}")
}

/// Serializes the full table; no rows are dropped or reordered.
pub struct TableExporter {
    spreadsheet: Option<SpreadsheetExporter>,
    csv: Option<CsvExporter>,
}

impl TableExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            spreadsheet: config
                .write_spreadsheet
                .then(|| SpreadsheetExporter::new(config.sheet_name.clone())),
            csv: config.write_csv.then(CsvExporter::new),
        }
    }

    pub fn export(&self, table: &FrequencyTable, base_name: &str) -> Result<ExportArtifacts> {
        let mut artifacts = ExportArtifacts::default();

        if let Some(spreadsheet) = &self.spreadsheet {
            artifacts.push(export_file_name(base_name, "xlsx"), spreadsheet.to_bytes(table)?);
        }

        if let Some(csv) = &self.csv {
            artifacts.push(export_file_name(base_name, "csv"), csv.to_bytes(table)?);
        }

        Ok(artifacts)
    }
}
