use std::collections::HashMap;

/// Raw n-gram frequencies over one token stream.
///
/// Keys borrow from the token slice. All marginals are taken over the
/// unfiltered stream, so filtering candidates later never changes a score.
#[derive(Debug, Default)]
pub struct NgramCounts<'a> {
    /// Number of tokens in the stream.
    pub total: u64,
    pub unigrams: HashMap<&'a str, u64>,
    /// Adjacent pairs `(w1, w2)`.
    pub bigrams: HashMap<(&'a str, &'a str), u64>,
    /// Pairs one token apart, `(w1, _, w3)`, taken from every trigram window.
    pub wildcards: HashMap<(&'a str, &'a str), u64>,
    pub trigrams: HashMap<(&'a str, &'a str, &'a str), u64>,
}

impl<'a> NgramCounts<'a> {
    pub fn from_tokens(tokens: &'a [String]) -> Self {
        let mut counts = NgramCounts {
            total: tokens.len() as u64,
            ..Default::default()
        };

        for token in tokens {
            *counts.unigrams.entry(token.as_str()).or_insert(0) += 1;
        }
        for w in tokens.windows(2) {
            *counts.bigrams.entry((w[0].as_str(), w[1].as_str())).or_insert(0) += 1;
        }
        for w in tokens.windows(3) {
            let (w1, w2, w3) = (w[0].as_str(), w[1].as_str(), w[2].as_str());
            *counts.trigrams.entry((w1, w2, w3)).or_insert(0) += 1;
            *counts.wildcards.entry((w1, w3)).or_insert(0) += 1;
        }

        counts
    }

    pub fn unigram(&self, w: &str) -> u64 {
        self.unigrams.get(w).copied().unwrap_or(0)
    }

    pub fn bigram(&self, w1: &'a str, w2: &'a str) -> u64 {
        self.bigrams.get(&(w1, w2)).copied().unwrap_or(0)
    }

    pub fn wildcard(&self, w1: &'a str, w3: &'a str) -> u64 {
        self.wildcards.get(&(w1, w3)).copied().unwrap_or(0)
    }
}
