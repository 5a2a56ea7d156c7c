// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading PDF file: {0}")]
    Extraction(String),

    #[error("Language model '{model}' not found at {path}. {remediation}")]
    ModelUnavailable {
        model: String,
        path: PathBuf,
        remediation: String,
    },

    #[error("Dictionary '{dictionary}' unavailable: {reason}")]
    DictionaryUnavailable { dictionary: String, reason: String },

    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
