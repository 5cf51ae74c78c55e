pub mod config;
pub mod game;
pub mod models;
pub mod utils;
pub mod vocabulary;

pub use game::{Board, BoardError, BoardGenerator, ResultSet, Scorer, WordFinder, WordValidator};
pub use models::{FoundWord, Multiplier, Position, Tile};
pub use vocabulary::{PrefixLookup, Vocabulary, VocabularyError};
