use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rayon::prelude::*;

use crate::game::grid::Board;
use crate::game::results::ResultSet;
use crate::game::scorer::Scorer;
use crate::models::{FoundWord, Position};
use crate::vocabulary::PrefixLookup;

/// Depth-first, backtracking enumeration of every vocabulary word reachable
/// on a board. Branches are pruned as soon as the accumulated letters are no
/// longer a prefix of any vocabulary word.
pub struct WordFinder<'a, V> {
    board: &'a Board,
    vocabulary: &'a V,
}

impl<'a, V: PrefixLookup> WordFinder<'a, V> {
    pub fn new(board: &'a Board, vocabulary: &'a V) -> Self {
        Self { board, vocabulary }
    }

    /// Enumerate every findable word, starting one search per cell.
    pub fn find_words(&self) -> ResultSet {
        let mut results = ResultSet::new();
        for start in 0..self.board.cell_count() {
            self.search_from(start, &mut results);
        }
        results
    }

    /// Same output as `find_words`, with one worker per starting cell. Each
    /// worker fills a local set; discoveries merge through a shared map so
    /// concurrent finds of the same word cannot race the score comparison.
    pub fn find_words_parallel(&self) -> ResultSet
    where
        V: Sync,
    {
        let merged: DashMap<String, FoundWord> = DashMap::new();

        (0..self.board.cell_count())
            .into_par_iter()
            .for_each(|start| {
                let mut local = ResultSet::new();
                self.search_from(start, &mut local);
                for found in local {
                    match merged.entry(found.word.clone()) {
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
            });

        let mut results = ResultSet::new();
        for (_, found) in merged {
            results.insert(found);
        }
        results
    }

    fn search_from(&self, start: usize, results: &mut ResultSet) {
        let mut path = Vec::with_capacity(self.board.cell_count());
        let mut word = String::with_capacity(self.board.cell_count());
        path.push(start);
        word.push(self.board.tile(start).letter);
        self.explore(start, &mut path, &mut word, results);
    }

    /// `path` ends at cell `at` and spells `word`. Yield the current word if
    /// it is in the vocabulary, then extend into every unvisited neighbour
    /// whose extended word is still a live prefix.
    fn explore(&self, at: usize, path: &mut Vec<usize>, word: &mut String, results: &mut ResultSet) {
        if self.vocabulary.contains(word) {
            let positions: Vec<Position> = path
                .iter()
                .map(|&index| self.board.tile(index).position)
                .collect();
            results.record(word.clone(), positions, Scorer::score_indices(self.board, path));
        }

        for &neighbour in self.board.neighbours(at) {
            if path.contains(&neighbour) {
                continue;
            }
            word.push(self.board.tile(neighbour).letter);
            if self.vocabulary.has_prefix(word) {
                path.push(neighbour);
                self.explore(neighbour, path, word, results);
                path.pop();
            }
            word.pop();
        }
    }
}
