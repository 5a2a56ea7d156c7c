// file: src/extractor/mod.rs
// description: document text extraction module exports
// reference: internal module structure

pub mod pdf;

pub use pdf::{Extraction, PdfExtractor};
