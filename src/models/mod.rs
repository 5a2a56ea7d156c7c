// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod frequency;
pub mod language;

pub use document::Document;
pub use frequency::{FrequencyTable, WordCount};
pub use language::{LanguageProfile, SUPPORTED_LANGUAGES};
