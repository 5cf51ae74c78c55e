use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub board: BoardConfig,
    pub solver: SolverConfig,
}

#[derive(Debug, Clone)]
pub struct VocabularyConfig {
    /// Directory of newline-delimited word lists, one file per language
    pub dir: PathBuf,
    /// Directory for the serialized word indexes
    pub cache_dir: PathBuf,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub size: usize,
    /// Board letters in row-major order; unset means generate a random board
    pub letters: Option<String>,
    /// Comma-separated `index:CODE` bonus entries, e.g. "3:Y,8:R"
    pub bonuses: String,
}

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub parallel: bool,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let vocabulary = VocabularyConfig {
            dir: env::var("VOCABULARY_DIR")
                .unwrap_or_else(|_| "./vocabularies".to_string())
                .into(),
            cache_dir: env::var("VOCABULARY_CACHE_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
            language: env::var("LANGUAGE").unwrap_or_else(|_| "english".to_string()),
        };

        let size: usize = env::var("BOARD_SIZE")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .context("BOARD_SIZE must be a number")?;
        if size == 0 {
            bail!("BOARD_SIZE must be at least 1");
        }
        let board = BoardConfig {
            size,
            letters: env::var("BOARD_LETTERS")
                .ok()
                .filter(|letters| !letters.trim().is_empty()),
            bonuses: env::var("BOARD_BONUSES").unwrap_or_default(),
        };

        let parallel = match env::var("SOLVER_PARALLEL") {
            Ok(value) => value == "1" || value.eq_ignore_ascii_case("true"),
            Err(_) => false,
        };
        let output = match env::var("RESULTS_FORMAT") {
            Ok(value) => match value.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                other => bail!("RESULTS_FORMAT must be \"table\" or \"json\", got {other:?}"),
            },
            Err(_) => OutputFormat::Table,
        };

        Ok(Config {
            vocabulary,
            board,
            solver: SolverConfig { parallel, output },
        })
    }
}
