// file: src/parser/mod.rs
// description: text cleaning module exports
// reference: internal module structure

pub mod cleaner;

pub use cleaner::TextCleaner;
