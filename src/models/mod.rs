pub mod board;

pub use board::{FoundWord, Multiplier, Position, Tile};
