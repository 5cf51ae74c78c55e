use rand::Rng;
use thiserror::Error;

use crate::{
    game::scorer::Scorer,
    models::{Multiplier, Position, Tile},
    utils::letters::{cumulative_distribution, letter_value},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("expected {expected} tiles, got {actual}")]
    WrongTileCount { expected: usize, actual: usize },
    #[error("unrecognized letter {0:?}")]
    InvalidLetter(char),
    #[error("unrecognized bonus code {0:?}")]
    InvalidBonusCode(String),
    #[error("malformed bonus entry {0:?}, expected index:code")]
    InvalidBonusEntry(String),
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// A square board of letter tiles with precomputed 8-directional adjacency.
#[derive(Debug)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
    /// Linear cell index -> neighbour indices, ascending. Built once so the
    /// search never redoes coordinate arithmetic.
    adjacency: Vec<Vec<usize>>,
}

impl Board {
    /// Build a board from exactly size² (letter, bonus) pairs in row-major
    /// order. Letters are lowercased on intake.
    pub fn new(size: usize, cells: Vec<(char, Option<Multiplier>)>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(BoardError::WrongTileCount {
                expected,
                actual: cells.len(),
            });
        }

        let mut tiles = Vec::with_capacity(expected);
        for (index, (letter, multiplier)) in cells.into_iter().enumerate() {
            let letter = letter.to_ascii_lowercase();
            let value = letter_value(letter).ok_or(BoardError::InvalidLetter(letter))?;
            tiles.push(Tile {
                letter,
                value,
                multiplier,
                position: Position {
                    row: index / size,
                    col: index % size,
                },
            });
        }

        Ok(Board {
            size,
            tiles,
            adjacency: build_adjacency(size),
        })
    }

    /// Build a board from a flat letter string (whitespace ignored) and a
    /// comma-separated bonus list of `index:CODE` entries, e.g. `"3:Y,8:R"`.
    /// Codes: Y = double word, G = double letter, B = triple letter,
    /// R = triple word.
    pub fn parse(size: usize, letters: &str, bonuses: &str) -> Result<Self, BoardError> {
        let mut cells: Vec<(char, Option<Multiplier>)> = letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| (c, None))
            .collect();

        for entry in bonuses.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (index, code) = entry
                .split_once(':')
                .ok_or_else(|| BoardError::InvalidBonusEntry(entry.to_string()))?;
            let index: usize = index
                .trim()
                .parse()
                .map_err(|_| BoardError::InvalidBonusEntry(entry.to_string()))?;
            if index >= cells.len() {
                return Err(BoardError::InvalidBonusEntry(entry.to_string()));
            }
            cells[index].1 = parse_bonus(code.trim())?;
        }

        Self::new(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Return the tile at the specified position.
    pub fn tile_at(&self, position: Position) -> Result<&Tile, BoardError> {
        if position.row >= self.size || position.col >= self.size {
            return Err(BoardError::OutOfBounds {
                row: position.row,
                col: position.col,
                size: self.size,
            });
        }
        Ok(&self.tiles[position.row * self.size + position.col])
    }

    /// Positions within Chebyshev distance 1 of `position`, clipped to the
    /// board: 3 for corners, 5 for edges, 8 for interior cells.
    pub fn neighbours_of(&self, position: Position) -> Result<Vec<Position>, BoardError> {
        let tile = self.tile_at(position)?;
        let index = tile.position.row * self.size + tile.position.col;
        Ok(self.adjacency[index]
            .iter()
            .map(|&neighbour| self.tiles[neighbour].position)
            .collect())
    }

    /// Total points obtained by following the letter path.
    pub fn score(&self, path: &[Position]) -> Result<i64, BoardError> {
        Scorer::score(self, path)
    }

    pub(crate) fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    pub(crate) fn neighbours(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }
}

fn build_adjacency(size: usize) -> Vec<Vec<usize>> {
    let mut adjacency = Vec::with_capacity(size * size);
    for index in 0..size * size {
        let (row, col) = (index / size, index % size);
        let mut neighbours = Vec::with_capacity(8);
        for delta_row in -1i64..=1 {
            for delta_col in -1i64..=1 {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let neighbour_row = row as i64 + delta_row;
                let neighbour_col = col as i64 + delta_col;
                if (0..size as i64).contains(&neighbour_row)
                    && (0..size as i64).contains(&neighbour_col)
                {
                    neighbours.push(neighbour_row as usize * size + neighbour_col as usize);
                }
            }
        }
        adjacency.push(neighbours);
    }
    adjacency
}

fn parse_bonus(code: &str) -> Result<Option<Multiplier>, BoardError> {
    match code.to_ascii_uppercase().as_str() {
        "" => Ok(None),
        "Y" => Ok(Some(Multiplier::DoubleWord)),
        "G" => Ok(Some(Multiplier::DoubleLetter)),
        "B" => Ok(Some(Multiplier::TripleLetter)),
        "R" => Ok(Some(Multiplier::TripleWord)),
        _ => Err(BoardError::InvalidBonusCode(code.to_string())),
    }
}

pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a random board of the given size with weighted letter
    /// distribution and a handful of bonus tiles.
    pub fn generate(size: usize) -> Board {
        let mut rng = rand::rng();
        let cumulative_dist = cumulative_distribution();
        let total = cumulative_dist.last().unwrap().1;

        let mut cells: Vec<(char, Option<Multiplier>)> = (0..size * size)
            .map(|_| (Self::random_letter(&cumulative_dist, total, &mut rng), None))
            .collect();

        Self::add_bonuses(&mut cells, &mut rng);

        Board::new(size, cells).expect("generated tiles form a valid board")
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'e' // Fallback
    }

    fn add_bonuses(cells: &mut [(char, Option<Multiplier>)], rng: &mut impl Rng) {
        // 2-3 double letters
        let dl_count = rng.random_range(2..=3);
        Self::place(cells, Multiplier::DoubleLetter, dl_count, rng);

        // 1-2 triple letters
        let tl_count = rng.random_range(1..=2);
        Self::place(cells, Multiplier::TripleLetter, tl_count, rng);

        // At most one of each word bonus
        Self::place(cells, Multiplier::DoubleWord, rng.random_range(0..=1), rng);
        Self::place(cells, Multiplier::TripleWord, rng.random_range(0..=1), rng);
    }

    fn place(
        cells: &mut [(char, Option<Multiplier>)],
        multiplier: Multiplier,
        count: usize,
        rng: &mut impl Rng,
    ) {
        for _ in 0..count {
            let index = rng.random_range(0..cells.len());
            if cells[index].1.is_none() {
                cells[index].1 = Some(multiplier);
            }
        }
    }
}
