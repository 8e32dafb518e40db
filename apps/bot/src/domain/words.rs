//! Secret-word pool loading and normalization.
//!
//! The external word source is a plain text file: one word per line,
//! `#` comment lines and blanks ignored, multi-token lines dropped. Entries
//! are uppercased and deduplicated preserving first occurrence. An empty
//! result falls back to a built-in list so a game can always start.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use rand::Rng;
use tracing::{info, warn};

/// Built-in pool used when the external source yields nothing.
const FALLBACK_WORDS: [&str; 8] = [
    "PIZZA",
    "AIRPLANE",
    "VOLCANO",
    "BICYCLE",
    "CHOCOLATE",
    "PYRAMID",
    "ROBOT",
    "CASTLE",
];

/// Normalized, deduplicated word pool.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load from a file path. A missing file is treated as an empty source
    /// (the fallback pool applies); any other I/O failure is returned.
    pub fn load(path: &Path) -> io::Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "word file not found, using fallback list");
                String::new()
            }
            Err(err) => return Err(err),
        };
        let list = Self::from_lines(raw.lines());
        info!(path = %path.display(), count = list.len(), "word pool loaded");
        Ok(list)
    }

    /// Normalize raw lines into a pool.
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for line in lines {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if word.contains(char::is_whitespace) {
                continue;
            }
            let word = word.to_uppercase();
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            words = FALLBACK_WORDS.iter().map(|w| w.to_string()).collect();
        }

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Draw one word uniformly. The pool is non-empty by construction (the
    /// fallback list applies when the source yields nothing).
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
