//! Cumulative word-frequency database and collocation report for a growing
//! directory of plain-text documents.
//!
//! Phase 1 ([`ingest`]) folds new documents into a persistent count map,
//! rebuilding from scratch when an already-counted file changes. Phase 2
//! ([`phrases`]) rescans the whole corpus and ranks frequent bigrams and
//! trigrams by log-likelihood ratio.

pub mod config;
pub mod error;
pub mod ingest;
pub mod phrases;
pub mod store;
pub mod text;
