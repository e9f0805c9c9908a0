use tantivy::tokenizer::{RegexTokenizer, TextAnalyzer, TokenStream};

use crate::error::LfError;

/// Word runs (with inner apostrophes) or runs of punctuation/symbols.
///
/// Punctuation is kept as its own token so that sentence boundaries still
/// separate words when n-grams are counted.
pub const TOKEN_PATTERN: &str = r"\w+(?:['’]\w+)*|[^\w\s]+";

/// Splits text into surface tokens, preserving case and order.
#[derive(Clone)]
pub struct WordTokenizer {
    analyzer: TextAnalyzer,
}

impl WordTokenizer {
    pub fn new() -> Result<Self, LfError> {
        let tokenizer = RegexTokenizer::new(TOKEN_PATTERN)?;
        Ok(Self {
            analyzer: TextAnalyzer::builder(tokenizer).build(),
        })
    }

    pub fn tokenize(&mut self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut stream = self.analyzer.token_stream(text);
        while stream.advance() {
            tokens.push(stream.token().text.clone());
        }
        tokens
    }
}
