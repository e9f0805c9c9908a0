use std::collections::BTreeMap;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::LfError;

/// Last-modified time in seconds since the Unix epoch.
pub type Timestamp = f64;

/// Files already folded into the database, with the mtime seen at ingest.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, Timestamp>,
}

impl Manifest {
    pub fn get(&self, name: &str) -> Option<Timestamp> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Must only be called once the file's tokens are in the database.
    pub fn record(&mut self, name: &str, modified: Timestamp) {
        self.entries.insert(name.to_string(), modified);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Timestamp)> {
        self.entries.iter().map(|(name, ts)| (name.as_str(), *ts))
    }
}

/// The manifest as found on disk.
///
/// Older runs wrote a bare array of file names. That shape carries no
/// timestamps, so it cannot vouch for the database and must be migrated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StoredManifest {
    Timestamped(Manifest),
    Legacy(Vec<String>),
}

impl Default for StoredManifest {
    fn default() -> Self {
        StoredManifest::Timestamped(Manifest::default())
    }
}

impl StoredManifest {
    #[cfg(test)]
    pub fn is_legacy(&self) -> bool {
        matches!(self, StoredManifest::Legacy(_))
    }

    /// Converts to the current shape. Legacy entries are dropped.
    pub fn migrate(self) -> Manifest {
        match self {
            StoredManifest::Timestamped(manifest) => manifest,
            StoredManifest::Legacy(_) => Manifest::default(),
        }
    }
}

/// Reads a JSON document.
///
/// Returns `Ok(None)` if the file does not exist and `MalformedState` if it
/// exists but does not parse.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, LfError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(LfError::Io(e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| LfError::MalformedState {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads persisted state, falling back to the default.
///
/// The flag is false when the file existed but could not be read or parsed,
/// so whatever it described can no longer be vouched for.
pub fn load_state<T: DeserializeOwned + Default>(path: &Path) -> (T, bool) {
    match read_json(path) {
        Ok(Some(value)) => (value, true),
        Ok(None) => (T::default(), true),
        Err(err) => {
            eprintln!("warning: {}; rebuilding from scratch", err);
            (T::default(), false)
        }
    }
}

/// Serializes `value` as pretty JSON and atomically replaces `path`.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), LfError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())
}

/// Writes to a temp file next to `path`, then renames it over `path`.
///
/// Readers see either the old content or the new content, never a
/// truncated file. Creates the parent directory if needed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), LfError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(bytes)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
