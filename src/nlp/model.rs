// file: src/nlp/model.rs
// description: language model interface and the lexicon-backed implementation
// reference: unicode word segmentation (uax #29) with lookup lemmatization

use crate::error::{PipelineError, Result};
use crate::nlp::segment::Segmenter;
use crate::nlp::stopwords::builtin_stopwords;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

pub const LEMMAS_FILE: &str = "lemmas.tsv";
pub const STOPWORDS_FILE: &str = "stopwords.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    pub text: String,
    pub lemma: String,
    pub is_alpha: bool,
}

impl AnalyzedToken {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            lemma: lemma.into(),
            is_alpha,
        }
    }
}

/// Tokenizes and lemmatizes text for one language. Loaded once, then shared
/// read-only between requests.
pub trait LanguageModel: Send + Sync {
    fn id(&self) -> &str;

    fn analyze(&self, text: &str) -> Vec<AnalyzedToken>;

    fn stopwords(&self) -> &HashSet<String>;
}

pub trait ModelLoader: Send + Sync {
    fn load(&self, model_id: &str, language_code: &str) -> Result<Arc<dyn LanguageModel>>;
}

#[derive(Debug, Default)]
pub struct LexiconModel {
    id: String,
    lemmas: HashMap<String, String>,
    stopwords: HashSet<String>,
    segmenter: Segmenter,
}

impl LexiconModel {
    pub fn new(
        id: impl Into<String>,
        lemmas: HashMap<String, String>,
        stopwords: HashSet<String>,
    ) -> Self {
        Self {
            id: id.into(),
            lemmas,
            stopwords,
            segmenter: Segmenter::Words,
        }
    }

    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Loads `<dir>/lemmas.tsv` and `<dir>/stopwords.txt`. Both files are
    /// optional; without a stopword file the built-in list for
    /// `language_code` is used. Segmentation follows `language_code`.
    pub fn from_dir(id: &str, dir: &Path, language_code: &str) -> Result<Self> {
        let lemma_path = dir.join(LEMMAS_FILE);
        let lemmas = if lemma_path.is_file() {
            parse_lemma_table(&read_file(&lemma_path)?)
        } else {
            HashMap::new()
        };

        let stopword_path = dir.join(STOPWORDS_FILE);
        let stopwords = if stopword_path.is_file() {
            parse_word_list(&read_file(&stopword_path)?)
        } else {
            builtin_stopwords(language_code)
        };

        debug!(
            "Lexicon model {}: {} lemma forms, {} stopwords",
            id,
            lemmas.len(),
            stopwords.len()
        );

        let segmenter = Segmenter::for_language(language_code);
        Ok(Self::new(id, lemmas, stopwords).with_segmenter(segmenter))
    }

    fn lemmatize(&self, token: &str) -> String {
        self.lemmas
            .get(&token.to_lowercase())
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }
}

impl LanguageModel for LexiconModel {
    fn id(&self) -> &str {
        &self.id
    }

    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        self.segmenter
            .segment(text)
            .into_iter()
            .map(|word| AnalyzedToken::new(word, self.lemmatize(word)))
            .collect()
    }

    fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }
}

/// Resolves model identifiers to directories under `models_dir`.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    models_dir: PathBuf,
}

impl LexiconLoader {
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }
}

impl ModelLoader for LexiconLoader {
    fn load(&self, model_id: &str, language_code: &str) -> Result<Arc<dyn LanguageModel>> {
        let dir = self.models_dir.join(model_id);

        if !dir.is_dir() {
            return Err(PipelineError::ModelUnavailable {
                model: model_id.to_string(),
                path: dir.clone(),
                remediation: format!(
                    "Create the directory {} containing {} (form<TAB>lemma per line) and optionally {}.",
                    dir.display(),
                    LEMMAS_FILE,
                    STOPWORDS_FILE
                ),
            });
        }

        info!("Loading language model {} from {}", model_id, dir.display());
        let model = LexiconModel::from_dir(model_id, &dir, language_code)?;
        Ok(Arc::new(model))
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_lemma_table(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (form, lemma) = line.split_once('\t')?;
            let (form, lemma) = (form.trim(), lemma.trim());
            if form.is_empty() || lemma.is_empty() {
                return None;
            }
            Some((form.to_lowercase(), lemma.to_lowercase()))
        })
        .collect()
}

fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
