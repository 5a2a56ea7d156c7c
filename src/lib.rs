// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod nlp;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use config::{AnalysisConfig, Config, DictionaryConfig, ExportConfig, ModelConfig};
pub use error::{PipelineError, Result};
pub use exporter::{ExportArtifacts, ExportManifest, TableExporter};
pub use extractor::{Extraction, PdfExtractor};
pub use models::{Document, FrequencyTable, LanguageProfile, SUPPORTED_LANGUAGES, WordCount};
pub use nlp::{
    DictionaryProvider, HunspellDictionaries, LanguageModel, LexiconLoader, ModelLoader,
    ModelRegistry, WordList,
};
pub use parser::TextCleaner;
pub use pipeline::{
    AnalysisOptions, AnalysisOutcome, AnalysisReport, EmptyStage, Notice, NoticeLevel,
    PipelineStats, WordAnalyzer,
};
pub use utils::Validator;
