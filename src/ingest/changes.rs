use std::collections::BTreeMap;

use crate::store::{StoredManifest, Timestamp};

/// Why the database has to be rebuilt from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildReason {
    /// The manifest has no timestamps, so nothing it lists can be trusted.
    LegacyManifest,
    /// A previously ingested file has a different mtime.
    ModifiedFiles,
    /// The manifest or database was unreadable, or the database exists
    /// without a manifest describing it.
    UntrustedState,
}

/// What the ingest phase has to do for the current directory contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangePlan {
    /// Files to tokenize and fold, in name order.
    pub to_process: Vec<String>,
    /// Database and manifest must be cleared before processing.
    pub full_rebuild: bool,
    pub reason: Option<RebuildReason>,
    /// Present in the directory, absent from the manifest.
    pub added: Vec<String>,
    /// Present in both, with a different timestamp.
    pub modified: Vec<String>,
    /// Listed in the manifest but gone from the directory. Informational only:
    /// their counts stay in the database.
    pub stale: Vec<String>,
}

impl ChangePlan {
    pub fn is_noop(&self) -> bool {
        !self.full_rebuild && self.to_process.is_empty()
    }

    /// Escalates to a full rebuild over every file in `current`.
    pub fn force_rebuild(
        mut self,
        current: &BTreeMap<String, Timestamp>,
        reason: RebuildReason,
    ) -> Self {
        if !self.full_rebuild {
            self.reason = Some(reason);
        }
        self.full_rebuild = true;
        self.to_process = current.keys().cloned().collect();
        self
    }
}

/// Compares the directory listing against the stored manifest.
///
/// Rules, applied in order:
/// 1. a legacy manifest counts as empty and forces a full rebuild;
/// 2. unknown files are new, known files with a different mtime force a
///    full rebuild (counts cannot be subtracted per file);
/// 3. on a full rebuild every current file is processed;
/// 4. otherwise only new files are processed;
/// 5. files that disappeared are left alone.
pub fn detect_changes(
    current: &BTreeMap<String, Timestamp>,
    stored: &StoredManifest,
) -> ChangePlan {
    let mut added = Vec::new();
    let mut modified = Vec::new();
    let mut stale = Vec::new();
    let mut reason = None;

    match stored {
        StoredManifest::Legacy(_) => {
            reason = Some(RebuildReason::LegacyManifest);
            added.extend(current.keys().cloned());
        }
        StoredManifest::Timestamped(manifest) => {
            for (name, modified_at) in current {
                match manifest.get(name) {
                    None => added.push(name.clone()),
                    Some(recorded) if recorded != *modified_at => modified.push(name.clone()),
                    Some(_) => {}
                }
            }
            if !modified.is_empty() {
                reason = Some(RebuildReason::ModifiedFiles);
            }
            stale.extend(
                manifest
                    .iter()
                    .filter(|(name, _)| !current.contains_key(*name))
                    .map(|(name, _)| name.to_string()),
            );
        }
    }

    let full_rebuild = reason.is_some();
    let to_process = if full_rebuild {
        current.keys().cloned().collect()
    } else {
        added.clone()
    };

    ChangePlan {
        to_process,
        full_rebuild,
        reason,
        added,
        modified,
        stale,
    }
}
