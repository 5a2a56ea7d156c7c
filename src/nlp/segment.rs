// file: src/nlp/segment.rs
// description: word segmentation for space-delimited and cjk scripts
// reference: uax #29 word bounds, https://docs.rs/jieba-rs

use jieba_rs::Jieba;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // Runs of a single Japanese script; the prolonged sound mark belongs to katakana words.
    static ref SCRIPT_RUN: Regex =
        Regex::new(r"\p{Han}+|\p{Hiragana}+|[\p{Katakana}ー]+").expect("SCRIPT_RUN regex is valid");
}

#[derive(Default)]
pub enum Segmenter {
    /// Unicode word boundaries.
    #[default]
    Words,
    /// Dictionary segmentation for Chinese.
    Jieba(Box<Jieba>),
    /// Han, hiragana and katakana runs each form one word; anything else
    /// falls back to Unicode word boundaries.
    ScriptRuns,
}

impl Segmenter {
    pub fn for_language(language_code: &str) -> Self {
        match language_code {
            "zh" => Segmenter::Jieba(Box::new(Jieba::new())),
            "ja" => Segmenter::ScriptRuns,
            _ => Segmenter::Words,
        }
    }

    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Segmenter::Words => text.unicode_words().collect(),
            Segmenter::Jieba(jieba) => jieba
                .cut(text, true)
                .into_iter()
                .filter(|word| !word.trim().is_empty())
                .collect(),
            Segmenter::ScriptRuns => script_runs(text),
        }
    }
}

impl fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segmenter::Words => "Words",
            Segmenter::Jieba(_) => "Jieba",
            Segmenter::ScriptRuns => "ScriptRuns",
        };
        f.write_str(name)
    }
}

fn script_runs(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut last = 0;

    for run in SCRIPT_RUN.find_iter(text) {
        words.extend(text[last..run.start()].unicode_words());
        words.push(run.as_str());
        last = run.end();
    }
    words.extend(text[last..].unicode_words());

    words
}
