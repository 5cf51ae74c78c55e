use crate::game::grid::{Board, BoardError};
use crate::models::Position;

pub struct Scorer;

impl Scorer {
    /// Calculate the score for a word given its path on the board.
    ///
    /// Scoring rules:
    /// - Each letter has a base value
    /// - DL (Double Letter) multiplies that letter's value by 2
    /// - TL (Triple Letter) multiplies that letter's value by 3
    /// - Each DW (Double Word) tile on the path doubles the whole word score
    /// - Each TW (Triple Word) tile on the path triples the whole word score
    /// - Word multipliers compound: two DW tiles mean x4
    pub fn score(board: &Board, path: &[Position]) -> Result<i64, BoardError> {
        let mut letter_total = 0i64;
        let mut double_words = 0u32;
        let mut triple_words = 0u32;

        for position in path {
            let tile = board.tile_at(*position)?;
            letter_total += tile.points();
            if tile.is_double_word() {
                double_words += 1;
            }
            if tile.is_triple_word() {
                triple_words += 1;
            }
        }

        Ok(letter_total * 2i64.pow(double_words) * 3i64.pow(triple_words))
    }

    /// Index-based variant for the finder's hot path. Indices come from the
    /// board's adjacency table, so bounds always hold.
    pub(crate) fn score_indices(board: &Board, path: &[usize]) -> i64 {
        let mut letter_total = 0i64;
        let mut double_words = 0u32;
        let mut triple_words = 0u32;

        for &index in path {
            let tile = board.tile(index);
            letter_total += tile.points();
            if tile.is_double_word() {
                double_words += 1;
            }
            if tile.is_triple_word() {
                triple_words += 1;
            }
        }

        letter_total * 2i64.pow(double_words) * 3i64.pow(triple_words)
    }
}
