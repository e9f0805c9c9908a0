use lexfreq::error::LfError;
use lexfreq::ingest::changes::RebuildReason;
use lexfreq::ingest::{self, IngestStats};
use lexfreq::phrases;

use crate::cmd::Cli;

/// Number of phrases echoed to the terminal after the report is written.
const PREVIEW_COUNT: usize = 5;

/// Runs both phases. Exits 1 if either could not run at all.
pub fn run(cli: &Cli) {
    let ingest_ok = run_ingest(cli);
    let phrases_ok = run_phrases(cli);
    if !(ingest_ok && phrases_ok) {
        std::process::exit(1);
    }
}

/// Phase 1. Returns false if the phase aborted.
pub fn run_ingest(cli: &Cli) -> bool {
    println!("\n--- PHASE 1: Word Frequency Analysis ---");
    let layout = cli.layout();
    let stoplist = cli.stoplist();
    let mut tagger = cli.tagger();
    if cli.lexicon.is_some() {
        println!("Lexicon loaded: {} entries.", tagger.lexicon_len());
    }

    match ingest::run_ingest(&layout, &stoplist, &mut tagger) {
        Ok(stats) => {
            print_ingest(&stats);
            true
        }
        Err(err) => {
            report_error(&err);
            false
        }
    }
}

fn print_ingest(stats: &IngestStats) {
    println!("Database loaded: {} unique entries.", stats.previous_entries);

    if !stats.plan.stale.is_empty() {
        println!(
            "note: {} previously counted file(s) no longer present; their counts are kept.",
            stats.plan.stale.len()
        );
    }

    match stats.plan.reason {
        Some(RebuildReason::LegacyManifest) => {
            println!("Processed-file log has no timestamps; rebuilding the database from scratch.")
        }
        Some(RebuildReason::ModifiedFiles) => println!(
            "{} file(s) changed since last run ({}); rebuilding the database from scratch.",
            stats.plan.modified.len(),
            stats.plan.modified.join(", ")
        ),
        Some(RebuildReason::UntrustedState) => {
            println!("Stored state could not be trusted; rebuilding the database from scratch.")
        }
        None => {}
    }

    if stats.plan.is_noop() {
        println!("No new files for frequency counting.");
        return;
    }

    println!("Processing {} file(s)...", stats.plan.to_process.len());
    for name in &stats.processed {
        println!(" -> counted: {}", name);
    }
    for (name, _) in &stats.failed {
        println!(" -> skipped: {} (will retry next run)", name);
    }
    println!(
        "Database updated: {} unique entries, {} tokens counted in {}ms.",
        stats.entries, stats.tokens_folded, stats.elapsed_ms
    );
}

/// Phase 2. Returns false if the phase aborted.
pub fn run_phrases(cli: &Cli) -> bool {
    println!("\n--- PHASE 2: Phrase & Collocation Extraction ---");
    println!("Reading full corpus...");
    let layout = cli.layout();
    let stoplist = cli.stoplist();
    let config = cli.collocation_config();

    match phrases::run_phrases(&layout, &stoplist, &config) {
        Ok(Some(report)) => {
            println!("Common phrases saved to: {}", layout.report_path().display());
            if !report.bigrams.is_empty() {
                println!("\nTop {} phrases found:", PREVIEW_COUNT.min(report.bigrams.len()));
                for (i, c) in report.bigrams.iter().take(PREVIEW_COUNT).enumerate() {
                    println!(" {}. {}", i + 1, c.phrase());
                }
            }
            true
        }
        Ok(None) => {
            println!("No text found.");
            true
        }
        Err(err) => {
            report_error(&err);
            false
        }
    }
}

fn report_error(err: &LfError) {
    match err {
        LfError::MissingInputDirectory(path) => {
            eprintln!(
                "error: input directory '{}' not found. Create it and add documents, or pass --input.",
                path.display()
            );
        }
        LfError::Pattern(e) => {
            eprintln!("error: invalid --pattern: {}", e);
        }
        LfError::Io(e) => {
            eprintln!("error: failed to write state: {}", e);
        }
        LfError::Json(e) => {
            eprintln!("error: failed to serialize state: {}", e);
        }
        _ => {
            eprintln!("error: {}", err);
        }
    }
}
