use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "Input_texts";
pub const DEFAULT_DB_DIR: &str = "database";
pub const DEFAULT_PATTERN: &str = "*.txt";

pub const DATABASE_FILE: &str = "word_counts.json";
pub const MANIFEST_FILE: &str = "processed_log.json";
pub const REPORT_FILE: &str = "common_phrases.txt";

/// Where the corpus lives and where derived state is written.
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    /// Directory scanned (non-recursively) for documents.
    pub input_dir: PathBuf,
    /// Directory holding the database, manifest and phrase report.
    pub db_dir: PathBuf,
    /// Glob matched against bare file names, e.g. `*.txt`.
    pub pattern: String,
}

impl CorpusLayout {
    pub fn new(input_dir: impl Into<PathBuf>, db_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            db_dir: db_dir.into(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn database_path(&self) -> PathBuf {
        self.db_dir.join(DATABASE_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.db_dir.join(MANIFEST_FILE)
    }

    pub fn report_path(&self) -> PathBuf {
        self.db_dir.join(REPORT_FILE)
    }

    pub fn document_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_INPUT_DIR), Path::new(DEFAULT_DB_DIR))
    }
}
