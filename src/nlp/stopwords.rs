// file: src/nlp/stopwords.rs
// description: stopword lists and the optional stopword removal stage
// reference: https://docs.rs/stop-words

use std::collections::HashSet;
use stop_words::{LANGUAGE, get};

/// Built-in stopword list for an ISO 639-1 code, empty when none ships.
pub fn builtin_stopwords(language_code: &str) -> HashSet<String> {
    let lang = match language_code {
        "en" => LANGUAGE::English,
        "de" => LANGUAGE::German,
        "fr" => LANGUAGE::French,
        "es" => LANGUAGE::Spanish,
        "it" => LANGUAGE::Italian,
        "pt" => LANGUAGE::Portuguese,
        "nl" => LANGUAGE::Dutch,
        "ru" => LANGUAGE::Russian,
        "sv" => LANGUAGE::Swedish,
        "nb" | "no" => LANGUAGE::Norwegian,
        "da" => LANGUAGE::Danish,
        "fi" => LANGUAGE::Finnish,
        "pl" => LANGUAGE::Polish,
        _ => return HashSet::new(),
    };

    get(lang).iter().map(|s| s.to_lowercase()).collect()
}

pub struct StopwordFilter<'a> {
    stopwords: &'a HashSet<String>,
}

impl<'a> StopwordFilter<'a> {
    pub fn new(stopwords: &'a HashSet<String>) -> Self {
        Self { stopwords }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn apply(&self, lemmas: Vec<String>) -> Vec<String> {
        lemmas
            .into_iter()
            .filter(|lemma| !self.is_stopword(lemma))
            .collect()
    }
}
