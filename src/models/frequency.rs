// file: src/models/frequency.rs
// description: ranked lemma frequency table
// reference: multiset reduction with stable ordering

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Lemma counts ordered by count descending. Equal counts keep the order in
/// which the lemma was first seen.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyTable {
    rows: Vec<WordCount>,
}

impl FrequencyTable {
    pub fn from_lemmas<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<WordCount> = Vec::new();

        for lemma in lemmas {
            let lemma = lemma.as_ref();
            match index.get(lemma) {
                Some(&pos) => rows[pos].count += 1,
                None => {
                    index.insert(lemma.to_string(), rows.len());
                    rows.push(WordCount {
                        word: lemma.to_string(),
                        count: 1,
                    });
                }
            }
        }

        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Self { rows }
    }

    pub fn rows(&self) -> &[WordCount] {
        &self.rows
    }

    pub fn head(&self, n: usize) -> &[WordCount] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.rows.iter().find(|r| r.word == word).map(|r| r.count)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }
}
