use std::collections::BTreeMap;
use std::path::Path;
use std::time::UNIX_EPOCH;

use glob::Pattern;
use ignore::WalkBuilder;

use crate::error::LfError;
use crate::store::Timestamp;

/// Lists the documents directly inside `input_dir` whose file name matches
/// `pattern`, with their last-modified time.
///
/// Hidden files and files named in `.gitignore` are listed too; this is a
/// plain directory listing, not a repository walk. Entries that cannot be
/// stat'ed, or whose names are not valid UTF-8, are skipped with a warning.
pub fn scan_corpus(
    input_dir: &Path,
    pattern: &str,
) -> Result<BTreeMap<String, Timestamp>, LfError> {
    if !input_dir.is_dir() {
        return Err(LfError::MissingInputDirectory(input_dir.to_path_buf()));
    }
    let pattern = Pattern::new(pattern)?;

    let walker = WalkBuilder::new(input_dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .follow_links(true)
        .build();

    let mut files = BTreeMap::new();
    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: scan error: {}", err);
                continue;
            }
        };

        if !entry.file_type().map_or(false, |ft| ft.is_file()) {
            continue;
        }

        let name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                eprintln!(
                    "warning: skipping {}: file name is not valid UTF-8",
                    entry.path().display()
                );
                continue;
            }
        };
        if !pattern.matches(&name) {
            continue;
        }

        let modified = match entry.metadata().map(|m| m.modified()) {
            Ok(Ok(time)) => time,
            Ok(Err(err)) => {
                eprintln!("warning: cannot stat {}: {}", entry.path().display(), err);
                continue;
            }
            Err(err) => {
                eprintln!("warning: cannot stat {}: {}", entry.path().display(), err);
                continue;
            }
        };
        let seconds = match modified.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(before_epoch) => -before_epoch.duration().as_secs_f64(),
        };

        files.insert(name, seconds);
    }

    Ok(files)
}
