pub mod counts;
pub mod report;
pub mod score;

use std::collections::HashSet;
use std::fs;

use crate::config::CorpusLayout;
use crate::error::LfError;
use crate::ingest::scanner::scan_corpus;
use crate::text::{is_punctuation, stopwords, Language, Stoplist, WordTokenizer};

use counts::NgramCounts;
use report::{write_report, Collocation, PhraseReport};
use score::{bigram_likelihood_ratio, trigram_likelihood_ratio};

/// Knobs for collocation extraction.
#[derive(Debug, Clone)]
pub struct CollocationConfig {
    /// N-grams seen fewer times than this are never scored.
    pub min_freq: u64,
    /// Tokens shorter than this (in characters) disqualify an n-gram.
    pub min_token_chars: usize,
    pub bigram_limit: usize,
    pub trigram_limit: usize,
}

impl Default for CollocationConfig {
    fn default() -> Self {
        Self {
            min_freq: 3,
            min_token_chars: 3,
            bigram_limit: 30,
            trigram_limit: 20,
        }
    }
}

/// Rejects n-grams containing low-value tokens.
pub struct WordFilter<'a> {
    stopwords: &'a HashSet<String>,
    stoplist: &'a Stoplist,
    min_chars: usize,
}

impl<'a> WordFilter<'a> {
    pub fn new(stopwords: &'a HashSet<String>, stoplist: &'a Stoplist, min_chars: usize) -> Self {
        Self {
            stopwords,
            stoplist,
            min_chars,
        }
    }

    /// True if `token` disqualifies any n-gram it appears in.
    pub fn rejects(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.stopwords.contains(&lower)
            || self.stoplist.contains(&lower)
            || is_punctuation(token)
            || token.chars().count() < self.min_chars
    }

    fn accepts_all(&self, tokens: &[&str]) -> bool {
        !tokens.iter().any(|t| self.rejects(t))
    }
}

/// Scores and ranks the collocations of one token stream.
///
/// Documents are expected to be concatenated without boundary markers, so
/// a few n-grams may span two files. Ranking is by score descending, then
/// by token sequence, so equal input always yields the same report.
pub fn extract_collocations(
    tokens: &[String],
    filter: &WordFilter<'_>,
    config: &CollocationConfig,
) -> PhraseReport {
    let counts = NgramCounts::from_tokens(tokens);

    let bigrams = counts
        .bigrams
        .iter()
        .filter(|(_, &freq)| freq >= config.min_freq)
        .filter(|(&(w1, w2), _)| filter.accepts_all(&[w1, w2]))
        .map(|(&(w1, w2), &freq)| Collocation {
            tokens: vec![w1.to_string(), w2.to_string()],
            frequency: freq,
            score: bigram_likelihood_ratio(
                freq,
                counts.unigram(w1),
                counts.unigram(w2),
                counts.total,
            ),
        })
        .collect();

    let trigrams = counts
        .trigrams
        .iter()
        .filter(|(_, &freq)| freq >= config.min_freq)
        .filter(|(&(w1, w2, w3), _)| filter.accepts_all(&[w1, w2, w3]))
        .map(|(&(w1, w2, w3), &freq)| Collocation {
            tokens: vec![w1.to_string(), w2.to_string(), w3.to_string()],
            frequency: freq,
            score: trigram_likelihood_ratio(
                freq,
                (
                    counts.bigram(w1, w2),
                    counts.wildcard(w1, w3),
                    counts.bigram(w2, w3),
                ),
                (counts.unigram(w1), counts.unigram(w2), counts.unigram(w3)),
                counts.total,
            ),
        })
        .collect();

    PhraseReport {
        bigrams: rank(bigrams, config.bigram_limit),
        trigrams: rank(trigrams, config.trigram_limit),
        bigram_limit: config.bigram_limit,
        trigram_limit: config.trigram_limit,
    }
}

fn rank(mut candidates: Vec<Collocation>, limit: usize) -> Vec<Collocation> {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.tokens.cmp(&b.tokens))
    });
    candidates.truncate(limit);
    candidates
}

/// Tokenizes every document in the input directory, in file-name order,
/// into one stream. Unreadable documents are skipped with a warning.
pub fn corpus_tokens(
    layout: &CorpusLayout,
    tokenizer: &mut WordTokenizer,
) -> Result<Vec<String>, LfError> {
    let files = scan_corpus(&layout.input_dir, &layout.pattern)?;
    let mut tokens = Vec::new();
    for name in files.keys() {
        let path = layout.document_path(name);
        match fs::read_to_string(&path) {
            Ok(text) => tokens.extend(tokenizer.tokenize(&text)),
            Err(err) => eprintln!("warning: skipping {}: {}", path.display(), err),
        }
    }
    Ok(tokens)
}

/// Rebuilds the phrase report from the full corpus.
///
/// Returns `None` without writing anything when the corpus has no tokens.
pub fn run_phrases(
    layout: &CorpusLayout,
    stoplist: &Stoplist,
    config: &CollocationConfig,
) -> Result<Option<PhraseReport>, LfError> {
    let mut tokenizer = WordTokenizer::new()?;
    let tokens = corpus_tokens(layout, &mut tokenizer)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let english = stopwords(Language::English);
    let filter = WordFilter::new(&english, stoplist, config.min_token_chars);
    let report = extract_collocations(&tokens, &filter, config);
    write_report(&layout.report_path(), &report)?;
    Ok(Some(report))
}
