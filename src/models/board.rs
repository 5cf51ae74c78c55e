use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub enum Multiplier {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "TL")]
    TripleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
    #[serde(rename = "TW")]
    TripleWord,
}

/// A single board cell. `position` is assigned once by the owning `Board`
/// during construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub value: u8,
    pub multiplier: Option<Multiplier>,
    pub position: Position,
}

impl Tile {
    /// Point value of this tile with its letter multiplier applied.
    /// Word multipliers are handled by the scorer, not here.
    pub fn points(&self) -> i64 {
        let base = self.value as i64;
        match self.multiplier {
            Some(Multiplier::DoubleLetter) => base * 2,
            Some(Multiplier::TripleLetter) => base * 3,
            _ => base,
        }
    }

    pub fn is_double_word(&self) -> bool {
        self.multiplier == Some(Multiplier::DoubleWord)
    }

    pub fn is_triple_word(&self) -> bool {
        self.multiplier == Some(Multiplier::TripleWord)
    }
}

/// A discovered word with its best-known path and that path's score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
    pub score: i64,
}
