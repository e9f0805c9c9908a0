pub mod aggregate;
pub mod changes;
pub mod normalize;
pub mod scanner;

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::CorpusLayout;
use crate::error::LfError;
use crate::store::{self, StoredManifest};
use crate::text::{Stoplist, Tagger};

use aggregate::FrequencyDatabase;
use changes::{detect_changes, ChangePlan, RebuildReason};
use normalize::{LexKey, Normalizer};
use scanner::scan_corpus;

/// Summary of one frequency-ingest run.
#[derive(Debug)]
pub struct IngestStats {
    /// Distinct entries in the database as loaded, before any reset.
    pub previous_entries: usize,
    pub plan: ChangePlan,
    /// Files folded into the database, in processing order.
    pub processed: Vec<String>,
    /// Files skipped this run; they stay out of the manifest and are retried next run.
    pub failed: Vec<(String, LfError)>,
    /// Distinct entries after the run.
    pub entries: usize,
    pub tokens_folded: u64,
    /// Whether the database and manifest were written.
    pub saved: bool,
    pub elapsed_ms: u64,
}

/// Brings the frequency database up to date with the input directory.
///
/// 1. Scans the input directory (fails with `MissingInputDirectory` before
///    touching any state)
/// 2. Loads database and manifest, treating missing or corrupt files as empty
/// 3. Decides between no-op, incremental add and full rebuild
/// 4. Tags, normalizes and folds each file, advancing its manifest entry only
///    after all of its tokens are counted
/// 5. Writes database and manifest atomically, once
pub fn run_ingest(
    layout: &CorpusLayout,
    stoplist: &Stoplist,
    tagger: &mut dyn Tagger,
) -> Result<IngestStats, LfError> {
    let start = Instant::now();
    let current = scan_corpus(&layout.input_dir, &layout.pattern)?;

    let (mut database, db_trusted) =
        store::load_state::<FrequencyDatabase>(&layout.database_path());
    let (stored, manifest_trusted) =
        store::load_state::<StoredManifest>(&layout.manifest_path());
    let manifest_missing = !layout.manifest_path().exists();
    let previous_entries = database.len();

    let mut plan = detect_changes(&current, &stored);
    let untracked_database = manifest_missing && !database.is_empty();
    if !db_trusted || !manifest_trusted || untracked_database {
        plan = plan.force_rebuild(&current, RebuildReason::UntrustedState);
    }

    let mut manifest = stored.migrate();
    if plan.full_rebuild {
        database.reset();
        manifest.clear();
    }

    let normalizer = Normalizer::new(stoplist);
    let mut processed = Vec::new();
    let mut failed = Vec::new();
    let mut tokens_folded = 0;

    for name in &plan.to_process {
        let path = layout.document_path(name);
        match document_keys(&path, tagger, &normalizer) {
            Ok(keys) => {
                tokens_folded += database.fold_all(keys);
                if let Some(modified) = current.get(name) {
                    manifest.record(name, *modified);
                }
                processed.push(name.clone());
            }
            Err(err) => {
                eprintln!("warning: skipping {}: {}", name, err);
                failed.push((name.clone(), err));
            }
        }
    }

    let saved = !plan.is_noop();
    if saved {
        store::save_json(&layout.database_path(), &database)?;
        store::save_json(&layout.manifest_path(), &manifest)?;
    }

    Ok(IngestStats {
        previous_entries,
        entries: database.len(),
        plan,
        processed,
        failed,
        tokens_folded,
        saved,
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}

/// Reads and tags one document, returning the keys to fold.
///
/// Either every qualifying token of the document is returned or an error is,
/// so a failure never leaves a file half counted.
pub fn document_keys(
    path: &Path,
    tagger: &mut dyn Tagger,
    normalizer: &Normalizer<'_>,
) -> Result<Vec<LexKey>, LfError> {
    let text = fs::read_to_string(path).map_err(|source| LfError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let tagged = tagger.tag(&text)?;
    Ok(tagged
        .iter()
        .filter_map(|t| normalizer.normalize(&t.lemma, t.tag))
        .collect())
}
