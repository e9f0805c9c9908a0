use std::fmt;
use std::path::PathBuf;

/// Structured error type for lexfreq operations.
///
/// Lets callers tell a missing input directory apart from a single
/// unreadable document or a corrupt state file, and pick the recovery
/// policy for each (abort the phase, skip the file, or start empty).
#[derive(Debug)]
pub enum LfError {
    /// File system I/O failure not tied to a specific document.
    Io(std::io::Error),
    /// JSON serialization/deserialization failure.
    Json(serde_json::Error),
    /// Tokenizer construction failure.
    Tantivy(tantivy::TantivyError),
    /// Invalid `--pattern` glob.
    Pattern(glob::PatternError),
    /// The configured input directory does not exist.
    MissingInputDirectory(PathBuf),
    /// A single document could not be read (or is not valid UTF-8).
    DocumentRead { path: PathBuf, source: std::io::Error },
    /// A persisted state file exists but does not parse.
    MalformedState { path: PathBuf, source: serde_json::Error },
    /// A tagger lexicon line is not `surface<TAB>lemma<TAB>TAG`.
    Lexicon { path: PathBuf, line: usize },
}

impl fmt::Display for LfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LfError::Io(e) => write!(f, "{}", e),
            LfError::Json(e) => write!(f, "json error: {}", e),
            LfError::Tantivy(e) => write!(f, "tokenizer error: {}", e),
            LfError::Pattern(e) => write!(f, "invalid file pattern: {}", e),
            LfError::MissingInputDirectory(path) => {
                write!(f, "input directory '{}' not found", path.display())
            }
            LfError::DocumentRead { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            LfError::MalformedState { path, source } => {
                write!(f, "corrupt state file {}: {}", path.display(), source)
            }
            LfError::Lexicon { path, line } => write!(
                f,
                "malformed lexicon entry at {}:{} (expected surface<TAB>lemma<TAB>TAG)",
                path.display(),
                line
            ),
        }
    }
}

impl std::error::Error for LfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LfError::Io(e) => Some(e),
            LfError::Json(e) => Some(e),
            LfError::Tantivy(e) => Some(e),
            LfError::Pattern(e) => Some(e),
            LfError::DocumentRead { source, .. } => Some(source),
            LfError::MalformedState { source, .. } => Some(source),
            LfError::MissingInputDirectory(_) | LfError::Lexicon { .. } => None,
        }
    }
}

impl From<std::io::Error> for LfError {
    fn from(e: std::io::Error) -> Self {
        LfError::Io(e)
    }
}

impl From<serde_json::Error> for LfError {
    fn from(e: serde_json::Error) -> Self {
        LfError::Json(e)
    }
}

impl From<tantivy::TantivyError> for LfError {
    fn from(e: tantivy::TantivyError) -> Self {
        LfError::Tantivy(e)
    }
}

impl From<glob::PatternError> for LfError {
    fn from(e: glob::PatternError) -> Self {
        LfError::Pattern(e)
    }
}
