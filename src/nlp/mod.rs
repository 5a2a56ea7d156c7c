// file: src/nlp/mod.rs
// description: linguistic analysis, stopword and dictionary stages
// reference: internal module structure

pub mod dictionary;
pub mod model;
pub mod registry;
pub mod segment;
pub mod stopwords;

pub use dictionary::{DictionaryFilter, DictionaryProvider, HunspellDictionaries, WordList};
pub use model::{AnalyzedToken, LanguageModel, LexiconLoader, LexiconModel, ModelLoader};
pub use registry::ModelRegistry;
pub use segment::Segmenter;
pub use stopwords::{StopwordFilter, builtin_stopwords};
