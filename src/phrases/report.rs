use std::path::Path;

use crate::error::LfError;
use crate::store::write_atomic;

/// A scored 2- or 3-token phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct Collocation {
    /// Surface tokens as they appear in the corpus.
    pub tokens: Vec<String>,
    /// Raw co-occurrence count.
    pub frequency: u64,
    /// G² association score.
    pub score: f64,
}

impl Collocation {
    pub fn phrase(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Ranked top bigrams and trigrams for the whole corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseReport {
    pub bigrams: Vec<Collocation>,
    pub trigrams: Vec<Collocation>,
    /// Limits the report was truncated to, shown in the section headers.
    pub bigram_limit: usize,
    pub trigram_limit: usize,
}

/// Formats the report as two labelled sections, one phrase per line.
///
/// ```text
/// --- TOP 30 2-WORD PHRASES (Bigrams) ---
/// coral reef
///
/// --- TOP 20 3-WORD PHRASES (Trigrams) ---
/// coral reef ecosystems
/// ```
pub fn format_report(report: &PhraseReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "--- TOP {} 2-WORD PHRASES (Bigrams) ---\n",
        report.bigram_limit
    ));
    for c in &report.bigrams {
        out.push_str(&c.phrase());
        out.push('\n');
    }

    out.push_str(&format!(
        "\n--- TOP {} 3-WORD PHRASES (Trigrams) ---\n",
        report.trigram_limit
    ));
    for c in &report.trigrams {
        out.push_str(&c.phrase());
        out.push('\n');
    }

    out
}

/// Replaces the report file at `path` with `report`.
pub fn write_report(path: &Path, report: &PhraseReport) -> Result<(), LfError> {
    write_atomic(path, format_report(report).as_bytes())
}
