//! Word lists used to classify planet names.
//!
//! Each list is plain text with one word per line. Lists are read once at
//! start-up; a list that cannot be read is replaced by an empty set so a run
//! still completes with fewer matches.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::SieveError;

/// Read-only set of recognised words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Build a set from newline-delimited text, skipping blank lines.
    pub fn from_lines(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Like [`WordSet::from_lines`], but lines that are not valid UTF-8 are
    /// dropped one by one instead of spoiling the whole list.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let words = bytes
            .split(|b| *b == b'\n')
            .filter_map(|line| std::str::from_utf8(line).ok())
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SieveError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SieveError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_bytes(&bytes);
        debug!(path = %path.display(), words = set.len(), "loaded word list");
        Ok(set)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Locations of the four word lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListPaths {
    pub english_single: PathBuf,
    pub english_double: PathBuf,
    pub approx_single: PathBuf,
    pub approx_double: PathBuf,
}

impl WordListPaths {
    /// Standard file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            english_single: dir.join("english-single.txt"),
            english_double: dir.join("english-double.txt"),
            approx_single: dir.join("approx-single.txt"),
            approx_double: dir.join("approx-double.txt"),
        }
    }
}

impl Default for WordListPaths {
    fn default() -> Self {
        Self::in_dir("wordlists/name")
    }
}

/// All word sets consulted by the classifiers.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub english_single: WordSet,
    pub english_double: WordSet,
    pub approx_single: WordSet,
    pub approx_double: WordSet,
}

impl Lexicon {
    /// Load every list, substituting an empty set for any that fails.
    ///
    /// Failures are handed back so the caller can report them once.
    pub fn load(paths: &WordListPaths) -> (Self, Vec<SieveError>) {
        let mut failures = Vec::new();
        let mut load = |path: &Path| match WordSet::load(path) {
            Ok(set) => set,
            Err(e) => {
                failures.push(e);
                WordSet::default()
            }
        };
        let lexicon = Self {
            english_single: load(paths.english_single.as_path()),
            english_double: load(paths.english_double.as_path()),
            approx_single: load(paths.approx_single.as_path()),
            approx_double: load(paths.approx_double.as_path()),
        };
        (lexicon, failures)
    }

    /// Word appears in either English list.
    pub fn is_english(&self, word: &str) -> bool {
        self.english_single.contains(word) || self.english_double.contains(word)
    }

    /// Word appears in either slang/approximate list.
    pub fn is_approx(&self, word: &str) -> bool {
        self.approx_single.contains(word) || self.approx_double.contains(word)
    }

    pub fn total_words(&self) -> usize {
        self.english_single.len()
            + self.english_double.len()
            + self.approx_single.len()
            + self.approx_double.len()
    }
}
