//! Text-analysis collaborators: tokenizer, tagger, stopword resources.
//!
//! The ingest and phrase pipelines only see these through narrow
//! interfaces (`WordTokenizer::tokenize`, the `Tagger` trait, `Stoplist`
//! and `stopwords`), so a better tagger can be dropped in without touching
//! the counting logic.

pub mod stoplist;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use stoplist::Stoplist;
pub use stopwords::{is_punctuation, stopwords, Language};
pub use tagger::{LexiconTagger, RawTag, TaggedToken, Tagger};
pub use tokenizer::WordTokenizer;
