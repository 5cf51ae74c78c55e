use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use thiserror::Error;
use tokio::fs;

/// Words shorter than this never make it into the index.
const MIN_WORD_LENGTH: usize = 2;

/// The capability the word search needs from a dictionary: exact membership
/// and live-prefix queries. Backing structure is up to the implementor.
pub trait PrefixLookup {
    /// True iff `word` is an indexed word.
    fn contains(&self, word: &str) -> bool;

    /// True iff at least one indexed word starts with `prefix`, the prefix
    /// itself included.
    fn has_prefix(&self, prefix: &str) -> bool;
}

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("no word list or cached index for language {language:?} (looked for {source_path:?} and {cache_path:?})")]
    Unavailable {
        language: String,
        source_path: PathBuf,
        cache_path: PathBuf,
    },
    #[error("word list for language {language:?} contains no usable words")]
    Empty { language: String },
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build word index")]
    Index(#[from] fst::Error),
}

/// The recognised words for one language, compiled into an fst set that
/// answers membership and prefix queries. Read-only once built, shareable
/// across concurrent searches.
#[derive(Debug)]
pub struct Vocabulary {
    language: String,
    index: Set<Vec<u8>>,
}

impl Vocabulary {
    /// Load the vocabulary for `language`: the cached serialized index under
    /// `cache_dir` if present, otherwise rebuilt from the newline-delimited
    /// word list under `dir` and re-serialized to the cache.
    pub async fn load(dir: &Path, cache_dir: &Path, language: &str) -> Result<Self, VocabularyError> {
        let language = language.to_lowercase();
        let cache_path = cache_dir.join(format!("{language}.fst"));
        let source_path = dir.join(&language);

        match fs::read(&cache_path).await {
            Ok(bytes) => match Set::new(bytes) {
                Ok(index) => {
                    tracing::info!("Loaded cached word index from {}", cache_path.display());
                    return Ok(Self { language, index });
                }
                Err(err) => {
                    tracing::warn!(
                        "Ignoring corrupt word index at {}: {}",
                        cache_path.display(),
                        err
                    );
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(VocabularyError::Io {
                    path: cache_path,
                    source,
                })
            }
        }

        let content = match fs::read_to_string(&source_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(VocabularyError::Unavailable {
                    language,
                    source_path,
                    cache_path,
                })
            }
            Err(source) => {
                return Err(VocabularyError::Io {
                    path: source_path,
                    source,
                })
            }
        };

        let vocabulary = Self::from_words(&language, content.lines())?;
        tracing::info!(
            "Loaded {} words for language {:?} from {}",
            vocabulary.word_count(),
            vocabulary.language(),
            source_path.display()
        );

        if let Err(err) = vocabulary.persist(&cache_path).await {
            tracing::warn!(
                "Failed to cache word index at {}: {}",
                cache_path.display(),
                err
            );
        }

        Ok(vocabulary)
    }

    /// Build a vocabulary in memory. Each word is normalized; words that do
    /// not survive normalization are skipped. An empty result is an error so
    /// a missing or garbage word list can never masquerade as a valid,
    /// word-free vocabulary.
    pub fn from_words<I, S>(language: &str, words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = BTreeSet::new();
        for raw in words {
            if let Some(word) = normalize_word(raw.as_ref()) {
                normalized.insert(word);
            }
        }

        if normalized.is_empty() {
            return Err(VocabularyError::Empty {
                language: language.to_string(),
            });
        }

        // BTreeSet iterates in lexicographic order, which fst requires
        let index = Set::from_iter(&normalized)?;
        Ok(Self {
            language: language.to_string(),
            index,
        })
    }

    /// Write the serialized index (the fst's raw bytes) to `cache_path`.
    async fn persist(&self, cache_path: &Path) -> std::io::Result<()> {
        if let Some(parent) = cache_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(cache_path, self.index.as_fst().as_bytes()).await
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn word_count(&self) -> usize {
        self.index.len()
    }
}

impl PrefixLookup for Vocabulary {
    fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        let matcher = Str::new(prefix).starts_with();
        self.index.search(matcher).into_stream().next().is_some()
    }
}

/// Lowercase a raw word and fold common diacritics onto their ASCII base
/// letters. Words containing anything that does not fold to `a..z`, and
/// words shorter than the minimum length, are rejected.
fn normalize_word(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut word = String::with_capacity(raw.len());
    for c in raw.chars() {
        for lower in c.to_lowercase() {
            match lower {
                'a'..='z' => word.push(lower),
                'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => word.push('a'),
                'ç' | 'ć' | 'č' => word.push('c'),
                'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => word.push('e'),
                'ì' | 'í' | 'î' | 'ï' | 'ī' => word.push('i'),
                'ñ' | 'ń' => word.push('n'),
                'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => word.push('o'),
                'ù' | 'ú' | 'û' | 'ü' | 'ū' => word.push('u'),
                'ý' | 'ÿ' => word.push('y'),
                'š' => word.push('s'),
                'ž' => word.push('z'),
                'ß' => word.push_str("ss"),
                'æ' => word.push_str("ae"),
                'œ' => word.push_str("oe"),
                _ => return None,
            }
        }
    }

    if word.len() < MIN_WORD_LENGTH {
        return None;
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_word("Cat"), Some("cat".to_string()));
        assert_eq!(normalize_word("  perché "), Some("perche".to_string()));
        assert_eq!(normalize_word("straße"), Some("strasse".to_string()));
        // Too short
        assert_eq!(normalize_word("a"), None);
        assert_eq!(normalize_word(""), None);
        // Unfoldable characters disqualify the word
        assert_eq!(normalize_word("it's"), None);
        assert_eq!(normalize_word("mc2"), None);
    }

    #[test]
    fn test_contains_and_has_prefix() {
        let vocabulary = Vocabulary::from_words("english", ["cat", "cart"]).unwrap();

        assert!(vocabulary.contains("cat"));
        assert!(!vocabulary.contains("ca"));
        assert!(!vocabulary.contains("dog"));

        assert!(vocabulary.has_prefix("ca"));
        // A full word counts as its own prefix
        assert!(vocabulary.has_prefix("cat"));
        assert!(vocabulary.has_prefix("cart"));
        assert!(!vocabulary.has_prefix("catx"));
        assert!(!vocabulary.has_prefix("dog"));
    }

    #[test]
    fn test_words_are_normalized_on_the_way_in() {
        let vocabulary = Vocabulary::from_words("italian", ["CAFFÈ", "però"]).unwrap();
        assert!(vocabulary.contains("caffe"));
        assert!(vocabulary.contains("pero"));
        assert_eq!(vocabulary.word_count(), 2);
    }

    #[test]
    fn test_empty_word_list_is_an_error() {
        let err = Vocabulary::from_words("english", ["a", "it's"]).unwrap_err();
        assert!(matches!(err, VocabularyError::Empty { .. }));
    }

    #[test]
    fn test_load_without_source_or_cache_fails() {
        let missing = std::env::temp_dir().join("ruzzle-voc-missing");
        let err = tokio_test::block_on(Vocabulary::load(
            &missing.join("vocabularies"),
            &missing.join("data"),
            "english",
        ))
        .unwrap_err();
        assert!(matches!(err, VocabularyError::Unavailable { .. }));
    }

    #[test]
    fn test_load_builds_cache_and_reuses_it() {
        let root = std::env::temp_dir().join(format!("ruzzle-voc-cache-{}", std::process::id()));
        let dir = root.join("vocabularies");
        let cache_dir = root.join("data");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("english"), "cat\nat\nit's\n").unwrap();

        let built = tokio_test::block_on(Vocabulary::load(&dir, &cache_dir, "english")).unwrap();
        assert_eq!(built.word_count(), 2);
        assert!(cache_dir.join("english.fst").exists());

        // Remove the source; the cached index alone must now satisfy a load
        std::fs::remove_file(dir.join("english")).unwrap();
        let cached = tokio_test::block_on(Vocabulary::load(&dir, &cache_dir, "english")).unwrap();
        assert!(cached.contains("cat"));
        assert!(cached.contains("at"));
        assert_eq!(cached.word_count(), 2);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_corrupt_cache_is_rebuilt_from_source() {
        let root = std::env::temp_dir().join(format!("ruzzle-voc-corrupt-{}", std::process::id()));
        let dir = root.join("vocabularies");
        let cache_dir = root.join("data");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::create_dir_all(&cache_dir).unwrap();
        std::fs::write(dir.join("english"), "cat\n").unwrap();
        std::fs::write(cache_dir.join("english.fst"), b"not an index").unwrap();

        let vocabulary =
            tokio_test::block_on(Vocabulary::load(&dir, &cache_dir, "english")).unwrap();
        assert!(vocabulary.contains("cat"));

        std::fs::remove_dir_all(&root).ok();
    }
}
