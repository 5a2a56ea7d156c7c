// file: src/nlp/dictionary.rs
// description: dictionary lookup and the dictionary filter stage with fallback
// reference: https://docs.rs/spellbook (hunspell .aff/.dic)

use crate::error::{PipelineError, Result};
use crate::pipeline::Notice;
use spellbook::Dictionary;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

pub trait WordList: Send + Sync {
    fn contains(&self, word: &str) -> bool;

    /// Distinct members of `words` known to this list.
    fn known(&self, words: &[String]) -> HashSet<String> {
        words
            .iter()
            .filter(|w| self.contains(w))
            .cloned()
            .collect()
    }
}

pub trait DictionaryProvider: Send + Sync {
    fn load(&self, dictionary_id: &str) -> Result<Arc<dyn WordList>>;
}

pub struct HunspellWordList {
    dictionary: Dictionary,
}

impl HunspellWordList {
    pub fn parse(dictionary_id: &str, aff: &str, dic: &str) -> Result<Self> {
        let dictionary = Dictionary::new(aff, dic).map_err(|e| {
            PipelineError::DictionaryUnavailable {
                dictionary: dictionary_id.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { dictionary })
    }
}

impl WordList for HunspellWordList {
    fn contains(&self, word: &str) -> bool {
        self.dictionary.check(word)
    }
}

/// Loads `<dir>/<id>.aff` + `<dir>/<id>.dic` once per id.
pub struct HunspellDictionaries {
    dictionaries_dir: PathBuf,
    cache: Mutex<HashMap<String, Arc<dyn WordList>>>,
}

impl HunspellDictionaries {
    pub fn new(dictionaries_dir: impl Into<PathBuf>) -> Self {
        Self {
            dictionaries_dir: dictionaries_dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn read(&self, dictionary_id: &str, extension: &str) -> Result<String> {
        let path = self
            .dictionaries_dir
            .join(format!("{dictionary_id}.{extension}"));
        fs::read_to_string(&path).map_err(|e| PipelineError::DictionaryUnavailable {
            dictionary: dictionary_id.to_string(),
            reason: format!("cannot read {}: {}", path.display(), e),
        })
    }
}

impl DictionaryProvider for HunspellDictionaries {
    fn load(&self, dictionary_id: &str) -> Result<Arc<dyn WordList>> {
        let mut cache = self.cache.lock().map_err(|_| PipelineError::DictionaryUnavailable {
            dictionary: dictionary_id.to_string(),
            reason: "dictionary cache lock poisoned".to_string(),
        })?;

        if let Some(list) = cache.get(dictionary_id) {
            return Ok(Arc::clone(list));
        }

        let aff = self.read(dictionary_id, "aff")?;
        let dic = self.read(dictionary_id, "dic")?;
        let list: Arc<dyn WordList> = Arc::new(HunspellWordList::parse(dictionary_id, &aff, &dic)?);

        info!("Loaded dictionary {}", dictionary_id);
        cache.insert(dictionary_id.to_string(), Arc::clone(&list));
        Ok(list)
    }
}

pub struct DictionaryFilter<'a> {
    provider: &'a dyn DictionaryProvider,
}

impl<'a> DictionaryFilter<'a> {
    pub fn new(provider: &'a dyn DictionaryProvider) -> Self {
        Self { provider }
    }

    /// Keeps only dictionary words. Returns the input unchanged when the
    /// language has no dictionary, the dictionary cannot be loaded, or the
    /// filter would discard every word.
    pub fn apply(
        &self,
        lemmas: Vec<String>,
        dictionary_id: Option<&str>,
        notices: &mut Vec<Notice>,
    ) -> Vec<String> {
        let Some(dictionary_id) = dictionary_id else {
            notices.push(Notice::info(
                "Dictionary filtering is enabled, but the selected language does not have a \
                 configured dictionary. Skipping.",
            ));
            return lemmas;
        };

        notices.push(Notice::info(format!(
            "Attempting dictionary filtering with '{dictionary_id}'..."
        )));

        let list = match self.provider.load(dictionary_id) {
            Ok(list) => list,
            Err(e) => {
                notices.push(Notice::warning(format!(
                    "Could not apply dictionary filtering for '{dictionary_id}': {e}. \
                     Skipping dictionary filtering."
                )));
                return lemmas;
            }
        };

        let known = list.known(&lemmas);
        let filtered: Vec<String> = lemmas
            .iter()
            .filter(|lemma| known.contains(lemma.as_str()))
            .cloned()
            .collect();

        debug!(
            "Dictionary {} recognised {} distinct words, kept {} of {} lemmas",
            dictionary_id,
            known.len(),
            filtered.len(),
            lemmas.len()
        );

        if !lemmas.is_empty() && filtered.is_empty() {
            notices.push(Notice::warning(format!(
                "Dictionary filtering with '{dictionary_id}' removed all words. This might be \
                 due to limited dictionary coverage for this text. Proceeding with words before \
                 dictionary filtering."
            )));
            lemmas
        } else if known.is_empty() && !lemmas.is_empty() {
            notices.push(Notice::warning(format!(
                "No words from the text were found in the '{dictionary_id}' dictionary. \
                 Dictionary filtering may not be effective. Proceeding with words before \
                 dictionary filtering."
            )));
            lemmas
        } else {
            filtered
        }
    }
}
