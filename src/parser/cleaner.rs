// file: src/parser/cleaner.rs
// description: text cleaning ahead of linguistic analysis
// reference: https://docs.rs/regex (unicode-aware \w and \s classes)

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not a word character, whitespace, or hyphen.
    static ref PUNCTUATION: Regex =
        Regex::new(r"[^\w\s-]").expect("PUNCTUATION regex is valid");

    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("WHITESPACE_RUN regex is valid");
}

pub struct TextCleaner;

impl TextCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, raw: &str) -> String {
        let stripped = self.strip_punctuation(raw);
        self.collapse_whitespace(&stripped)
    }

    fn strip_punctuation(&self, content: &str) -> String {
        PUNCTUATION.replace_all(content, "").into_owned()
    }

    fn collapse_whitespace(&self, content: &str) -> String {
        WHITESPACE_RUN.replace_all(content, " ").trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
