// Vocabulary store: the set of valid words

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashSet;

/// Error type for vocabulary loading.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The vocabulary file could not be opened.
    #[error("failed to open vocabulary {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be read. Invalid UTF-8 also lands here.
    #[error("failed to read vocabulary: {0}")]
    Read(#[from] io::Error),
}

/// The set of words a path may pass through.
///
/// Words are compared exactly; the only normalization is trimming of
/// surrounding whitespace at load time. The store grows when a query names
/// an endpoint that is not yet present, and that growth is permanent for
/// the store's lifetime.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    words: HashSet<String>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an iterator of words, trimming each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Read one word per line from `reader`.
    ///
    /// Every line is trimmed and inserted, so a blank line contributes the
    /// empty word. The input must be UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, VocabularyError> {
        let mut store = Self::new();
        for line in reader.lines() {
            let line = line?;
            store.insert(line.trim());
        }
        tracing::info!(words = store.len(), "vocabulary loaded");
        Ok(store)
    }

    /// Open `path` and read it with [`VocabularyStore::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| VocabularyError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Insert `word`. Returns `true` if it was not present before.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.words.contains(word) {
            return false;
        }
        self.words.insert(word.to_string())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn from_reader_trims_lines() {
        let store = VocabularyStore::from_reader(Cursor::new("cat\n  dog \r\ncot\t\n")).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.contains("cat"));
        assert!(store.contains("dog"));
        assert!(store.contains("cot"));
        assert!(!store.contains(" dog "));
    }

    #[test]
    fn blank_line_yields_empty_word() {
        let store = VocabularyStore::from_reader(Cursor::new("a\n\n   \nb\n")).unwrap();
        assert!(store.contains(""));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn duplicates_collapse() {
        let store = VocabularyStore::from_reader(Cursor::new("cat\ncat\n cat\n")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn no_case_folding() {
        let store = VocabularyStore::from_words(["Cat"]);
        assert!(store.contains("Cat"));
        assert!(!store.contains("cat"));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"cat\n\xff\xfe\n";
        let err = VocabularyStore::from_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, VocabularyError::Read(_)));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = VocabularyStore::from_path("/nonexistent/wordpath/words.txt").unwrap_err();
        match err {
            VocabularyError::Open { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/wordpath/words.txt"));
            }
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn insert_is_idempotent() {
        let mut store = VocabularyStore::new();
        assert!(store.insert("dog"));
        assert!(!store.insert("dog"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn iter_yields_every_word() {
        let store = VocabularyStore::from_words(["a", "b", "c"]);
        let mut words: Vec<&str> = store.iter().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["a", "b", "c"]);
    }
}
