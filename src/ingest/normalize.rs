use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::text::{RawTag, Stoplist};

/// Word classes tracked by the frequency database.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "ADJ")]
    Adjective,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 3] = [PartOfSpeech::Noun, PartOfSpeech::Verb, PartOfSpeech::Adjective];

    /// Tag as written in keys and in the database document.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adjective => "ADJ",
        }
    }

    pub fn plural_label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUNS",
            PartOfSpeech::Verb => "VERBS",
            PartOfSpeech::Adjective => "ADJECTIVES",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "noun" => Ok(PartOfSpeech::Noun),
            "verb" => Ok(PartOfSpeech::Verb),
            "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            other => Err(format!(
                "unknown part of speech '{}' (expected noun, verb or adj)",
                other
            )),
        }
    }
}

/// Canonical accounting key: a lowercase lemma and its word class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexKey {
    pub lemma: String,
    pub pos: PartOfSpeech,
}

impl LexKey {
    pub fn new(lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
        }
    }

    /// `"<lemma>_<TAG>"`, the key used in the database document.
    pub fn canonical(&self) -> String {
        format!("{}_{}", self.lemma, self.pos.as_str())
    }
}

impl fmt::Display for LexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.lemma, self.pos.as_str())
    }
}

/// Turns tagger output into database keys.
pub struct Normalizer<'a> {
    stoplist: &'a Stoplist,
}

impl<'a> Normalizer<'a> {
    pub fn new(stoplist: &'a Stoplist) -> Self {
        Self { stoplist }
    }

    /// Returns `None` when the token should not be counted.
    ///
    /// The stoplist is checked against the lowercased lemma as tagged, before
    /// any adverb rewrite. Adverbs are counted as adjectives.
    pub fn normalize(&self, lemma: &str, tag: RawTag) -> Option<LexKey> {
        let lemma = lemma.to_lowercase();
        if self.stoplist.contains(&lemma) {
            return None;
        }
        match tag {
            RawTag::Noun => Some(LexKey::new(lemma, PartOfSpeech::Noun)),
            RawTag::Verb => Some(LexKey::new(lemma, PartOfSpeech::Verb)),
            RawTag::Adjective => Some(LexKey::new(lemma, PartOfSpeech::Adjective)),
            RawTag::Adverb => Some(LexKey::new(
                adverb_to_adjective(&lemma),
                PartOfSpeech::Adjective,
            )),
            RawTag::Other => None,
        }
    }
}

/// Approximates an adjective root from an adverb by suffix stripping.
///
/// `-ily` becomes `-y` (`happily` → `happy`), otherwise a trailing `-ly` is
/// dropped (`quickly` → `quick`). No dictionary is consulted: irregular
/// adverbs come out as non-words (`fully` → `ful`, `well` → `well`), and
/// that output is what gets counted.
pub fn adverb_to_adjective(lemma: &str) -> String {
    if let Some(stem) = lemma.strip_suffix("ily") {
        format!("{}y", stem)
    } else if let Some(stem) = lemma.strip_suffix("ly") {
        stem.to_string()
    } else {
        lemma.to_string()
    }
}
