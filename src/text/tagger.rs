use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::LfError;

use super::stopwords::{stopwords, Language};
use super::tokenizer::WordTokenizer;

/// Part-of-speech tag as reported by a tagger, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Anything the frequency database does not track (PROPN, DET, PUNCT, ...).
    Other,
}

impl RawTag {
    /// Maps a Universal POS tag string (`NOUN`, `ADV`, ...) to a `RawTag`.
    pub fn from_upos(tag: &str) -> RawTag {
        match tag.trim().to_ascii_uppercase().as_str() {
            "NOUN" => RawTag::Noun,
            "VERB" => RawTag::Verb,
            "ADJ" | "ADJECTIVE" => RawTag::Adjective,
            "ADV" | "ADVERB" => RawTag::Adverb,
            _ => RawTag::Other,
        }
    }
}

/// One token's tagger output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub lemma: String,
    pub tag: RawTag,
}

impl TaggedToken {
    pub fn new(lemma: impl Into<String>, tag: RawTag) -> Self {
        Self {
            lemma: lemma.into(),
            tag,
        }
    }
}

/// Lemmatizes and POS-tags a whole document.
///
/// Output is aligned with the document's tokens, in order.
pub trait Tagger {
    fn tag(&mut self, text: &str) -> Result<Vec<TaggedToken>, LfError>;
}

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ic"];

/// Dictionary tagger with a suffix-rule fallback.
///
/// Each token is looked up (lowercased) in a lexicon of
/// `surface<TAB>lemma<TAB>UPOS` lines. Unknown tokens get a rough guess:
/// punctuation, numbers and function words are `Other`, `-ly` words are
/// adverbs, a few derivational suffixes mark adjectives, everything else is a
/// noun. Guessed lemmas are the lowercased surface form.
pub struct LexiconTagger {
    tokenizer: WordTokenizer,
    lexicon: HashMap<String, TaggedToken>,
    function_words: HashSet<String>,
}

impl LexiconTagger {
    /// A tagger with an empty lexicon (suffix rules only).
    pub fn new() -> Result<Self, LfError> {
        Ok(Self {
            tokenizer: WordTokenizer::new()?,
            lexicon: HashMap::new(),
            function_words: stopwords(Language::English),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, LfError> {
        let content = fs::read_to_string(path)?;
        let mut tagger = Self::new()?;
        tagger.lexicon = parse_lexicon(&content, path)?;
        Ok(tagger)
    }

    #[cfg(test)]
    pub fn with_entries<I>(entries: I) -> Result<Self, LfError>
    where
        I: IntoIterator<Item = (String, TaggedToken)>,
    {
        let mut tagger = Self::new()?;
        tagger.lexicon = entries
            .into_iter()
            .map(|(surface, token)| (surface.to_lowercase(), token))
            .collect();
        Ok(tagger)
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    fn tag_token(&self, surface: &str) -> TaggedToken {
        let lower = surface.to_lowercase();
        if let Some(entry) = self.lexicon.get(&lower) {
            return entry.clone();
        }
        let tag = self.guess(&lower);
        TaggedToken { lemma: lower, tag }
    }

    fn guess(&self, lower: &str) -> RawTag {
        if !lower.chars().any(char::is_alphabetic) || self.function_words.contains(lower) {
            return RawTag::Other;
        }
        let len = lower.chars().count();
        if len > 4 && lower.ends_with("ly") {
            return RawTag::Adverb;
        }
        let adjective = ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| len > suffix.len() + 2 && lower.ends_with(suffix));
        if adjective {
            RawTag::Adjective
        } else {
            RawTag::Noun
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&mut self, text: &str) -> Result<Vec<TaggedToken>, LfError> {
        let tokens = self.tokenizer.tokenize(text);
        Ok(tokens.iter().map(|t| self.tag_token(t)).collect())
    }
}

/// Parses `surface<TAB>lemma<TAB>UPOS` lines. Blank lines and `#` comments are skipped.
fn parse_lexicon(content: &str, path: &Path) -> Result<HashMap<String, TaggedToken>, LfError> {
    let mut lexicon = HashMap::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(LfError::Lexicon {
                path: path.to_path_buf(),
                line: idx + 1,
            });
        }
        lexicon.insert(
            parts[0].to_lowercase(),
            TaggedToken::new(parts[1], RawTag::from_upos(parts[2])),
        );
    }
    Ok(lexicon)
}
