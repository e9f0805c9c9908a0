use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize::{LexKey, PartOfSpeech};

/// Running count for one `(lemma, part of speech)` pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub lemma: String,
    #[serde(rename = "type")]
    pub pos: PartOfSpeech,
    pub count: u64,
}

/// Cumulative token counts keyed by `"<lemma>_<TAG>"`.
///
/// Counts only grow. The only way to lower one is `reset`, which drops
/// every entry at once.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyDatabase {
    entries: BTreeMap<String, LexicalEntry>,
}

impl FrequencyDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn fold(&mut self, key: LexKey) {
        self.entries
            .entry(key.canonical())
            .and_modify(|entry| entry.count += 1)
            .or_insert_with(|| LexicalEntry {
                lemma: key.lemma,
                pos: key.pos,
                count: 1,
            });
    }

    /// Folds every key; returns how many were folded.
    pub fn fold_all<I: IntoIterator<Item = LexKey>>(&mut self, keys: I) -> u64 {
        let mut folded = 0;
        for key in keys {
            self.fold(key);
            folded += 1;
        }
        folded
    }

    /// Starts a new epoch: every entry is dropped.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, canonical: &str) -> Option<&LexicalEntry> {
        self.entries.get(canonical)
    }

    pub fn count(&self, lemma: &str, pos: PartOfSpeech) -> u64 {
        self.entries
            .get(&LexKey::new(lemma, pos).canonical())
            .map_or(0, |e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LexicalEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Sum of all counts.
    pub fn total_tokens(&self) -> u64 {
        self.entries.values().map(|e| e.count).sum()
    }

    /// Number of distinct entries for `pos`.
    pub fn distinct(&self, pos: PartOfSpeech) -> usize {
        self.entries.values().filter(|e| e.pos == pos).count()
    }

    /// Most frequent entries for `pos`: count descending, then lemma ascending.
    pub fn top(&self, pos: PartOfSpeech, limit: usize) -> Vec<&LexicalEntry> {
        let mut entries: Vec<&LexicalEntry> =
            self.entries.values().filter(|e| e.pos == pos).collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.lemma.cmp(&b.lemma)));
        entries.truncate(limit);
        entries
    }
}
