use std::collections::hash_map::{Entry, IntoValues};
use std::collections::HashMap;

use crate::models::{FoundWord, Position};

/// Aggregates discovered words, keeping the best-scoring path per word.
#[derive(Debug, Default)]
pub struct ResultSet {
    best: HashMap<String, FoundWord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: String, path: Vec<Position>, score: i64) {
        self.insert(FoundWord { word, path, score });
    }

    /// Insert or update the entry for this word. The stored path and score
    /// are replaced only when the new score is strictly greater.
    pub fn insert(&mut self, found: FoundWord) {
        match self.best.entry(found.word.clone()) {
            Entry::Occupied(mut slot) => {
                if found.score > slot.get().score {
                    slot.insert(found);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(found);
            }
        }
    }

    /// All results sorted by descending score; ties break by ascending
    /// lexicographic word order so output is deterministic.
    pub fn ranked(self) -> Vec<FoundWord> {
        let mut all: Vec<FoundWord> = self.best.into_values().collect();
        all.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        all
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = FoundWord;
    type IntoIter = IntoValues<String, FoundWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.best.into_values()
    }
}
