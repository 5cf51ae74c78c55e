use std::collections::HashSet;

use crate::game::grid::{Board, BoardError};
use crate::models::Position;
use crate::vocabulary::PrefixLookup;

/// Checks externally supplied words and paths against a board and a
/// vocabulary.
pub struct WordValidator<'a, V> {
    vocabulary: &'a V,
}

impl<'a, V: PrefixLookup> WordValidator<'a, V> {
    pub fn new(vocabulary: &'a V) -> Self {
        Self { vocabulary }
    }

    /// Check if word exists in the vocabulary
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.vocabulary.contains(&word.to_lowercase())
    }

    /// Validate that positions form a valid path on the board
    pub fn is_valid_path(&self, board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        if unique_positions.len() != positions.len() {
            return false;
        }

        // Check that all positions are within bounds
        positions
            .iter()
            .all(|position| position.row < board.size() && position.col < board.size())
    }

    /// Check if two positions are adjacent (including diagonals)
    fn are_adjacent(first: &Position, second: &Position) -> bool {
        let row_diff = (first.row as i64 - second.row as i64).abs();
        let col_diff = (first.col as i64 - second.col as i64).abs();

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Extract the word spelled by the given path
    pub fn extract_word(&self, board: &Board, positions: &[Position]) -> Result<String, BoardError> {
        positions
            .iter()
            .map(|position| board.tile_at(*position).map(|tile| tile.letter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words("english", ["cat", "at"]).unwrap()
    }

    #[test]
    fn test_word_membership_is_case_normalized() {
        let vocabulary = vocabulary();
        let validator = WordValidator::new(&vocabulary);
        assert!(validator.is_valid_word("cat"));
        assert!(validator.is_valid_word("CAT"));
        assert!(!validator.is_valid_word("dog"));
    }

    #[test]
    fn test_adjacent_positions() {
        let pos1 = Position { row: 0, col: 0 };
        let pos2 = Position { row: 0, col: 1 };
        let pos3 = Position { row: 1, col: 1 };
        let pos4 = Position { row: 2, col: 2 };

        assert!(WordValidator::<Vocabulary>::are_adjacent(&pos1, &pos2));
        assert!(WordValidator::<Vocabulary>::are_adjacent(&pos2, &pos3));
        assert!(!WordValidator::<Vocabulary>::are_adjacent(&pos1, &pos4));
    }

    #[test]
    fn test_path_validity() {
        let vocabulary = vocabulary();
        let validator = WordValidator::new(&vocabulary);
        let board = Board::parse(3, "catssssss", "").unwrap();

        let valid = vec![
            Position { row: 0, col: 0 },
            Position { row: 0, col: 1 },
            Position { row: 1, col: 1 },
        ];
        assert!(validator.is_valid_path(&board, &valid));

        // Empty paths are invalid
        assert!(!validator.is_valid_path(&board, &[]));

        // A position cannot be visited twice
        let repeated = vec![
            Position { row: 0, col: 0 },
            Position { row: 0, col: 1 },
            Position { row: 0, col: 0 },
        ];
        assert!(!validator.is_valid_path(&board, &repeated));

        // Steps must be adjacent
        let disconnected = vec![
            Position { row: 0, col: 0 },
            Position { row: 2, col: 2 },
        ];
        assert!(!validator.is_valid_path(&board, &disconnected));

        // Positions must be on the board
        let outside = vec![Position { row: 0, col: 3 }];
        assert!(!validator.is_valid_path(&board, &outside));
    }

    #[test]
    fn test_extract_word() {
        let vocabulary = vocabulary();
        let validator = WordValidator::new(&vocabulary);
        let board = Board::parse(2, "cats", "").unwrap();

        let path = vec![
            Position { row: 0, col: 0 },
            Position { row: 0, col: 1 },
            Position { row: 1, col: 0 },
        ];
        assert_eq!(validator.extract_word(&board, &path).unwrap(), "cat");

        let outside = vec![Position { row: 4, col: 4 }];
        assert!(validator.extract_word(&board, &outside).is_err());
    }
}
