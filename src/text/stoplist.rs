use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::LfError;

const BUILTIN: &str = include_str!("../../resources/stoplist.txt");

/// Lemmas excluded from frequency accounting and phrase candidates.
///
/// Built once at startup and passed by reference; never mutated during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stoplist {
    words: HashSet<String>,
}

impl Stoplist {
    /// The stoplist shipped with the tool.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN)
    }

    /// Loads a whitespace-separated word list; `#` starts a comment line.
    pub fn from_file(path: &Path) -> Result<Self, LfError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// `word` must already be lowercase.
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
