use anyhow::Result;
use ruzzle_solver::config::{Config, OutputFormat};
use ruzzle_solver::{Board, BoardGenerator, Position, Vocabulary, WordFinder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ruzzle_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Load vocabulary (cached index if available, word list otherwise)
    let vocabulary = Vocabulary::load(
        &config.vocabulary.dir,
        &config.vocabulary.cache_dir,
        &config.vocabulary.language,
    )
    .await?;
    tracing::info!(
        "Vocabulary {:?} ready with {} words",
        vocabulary.language(),
        vocabulary.word_count()
    );

    // Build the board
    let board = match &config.board.letters {
        Some(letters) => Board::parse(config.board.size, letters, &config.board.bonuses)?,
        None => {
            tracing::info!("No board letters configured, generating a random board");
            BoardGenerator::generate(config.board.size)
        }
    };
    tracing::info!("Solving a {0}x{0} board", board.size());

    // Enumerate and rank every findable word
    let finder = WordFinder::new(&board, &vocabulary);
    let results = if config.solver.parallel {
        finder.find_words_parallel()
    } else {
        finder.find_words()
    };
    tracing::info!("Found {} words", results.len());

    let ranked = results.ranked();
    match config.solver.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        OutputFormat::Table => {
            for found in &ranked {
                println!(
                    "{:>5} {:<16} {}",
                    found.score,
                    found.word.to_uppercase(),
                    format_path(&found.path)
                );
            }
        }
    }

    Ok(())
}

/// Render a path as its coordinate list, e.g. `[(0, 0), (1, 1)]`.
fn format_path(path: &[Position]) -> String {
    let cells: Vec<String> = path
        .iter()
        .map(|position| format!("({}, {})", position.row, position.col))
        .collect();
    format!("[{}]", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path() {
        let path = vec![
            Position { row: 0, col: 0 },
            Position { row: 1, col: 1 },
            Position { row: 2, col: 1 },
        ];
        assert_eq!(format_path(&path), "[(0, 0), (1, 1), (2, 1)]");
        assert_eq!(format_path(&[]), "[]");
    }
}
