#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use lexfreq::config::CorpusLayout;
use lexfreq::ingest::aggregate::FrequencyDatabase;
use lexfreq::store::{self, StoredManifest};
use lexfreq::text::{LexiconTagger, Stoplist};

/// Path to the source fixture corpus. Tests must copy it before writing.
pub fn fixture_corpus() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/corpus")
}

pub fn fixture_lexicon() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lexicon.tsv")
}

/// Copies every file in `src` into `dst`.
pub fn copy_dir(src: &Path, dst: &Path) {
    fs::create_dir_all(dst).expect("failed to create dst dir");
    for entry in fs::read_dir(src).expect("failed to read src dir") {
        let entry = entry.expect("failed to read entry");
        fs::copy(entry.path(), dst.join(entry.file_name())).expect("failed to copy file");
    }
}

/// An isolated copy of the fixture corpus plus an empty state directory.
pub fn isolated_corpus() -> (tempfile::TempDir, CorpusLayout) {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let input = tmp.path().join("Input_texts");
    copy_dir(&fixture_corpus(), &input);
    let layout = CorpusLayout::new(input, tmp.path().join("database"));
    (tmp, layout)
}

/// An empty input directory plus an empty state directory.
pub fn empty_corpus() -> (tempfile::TempDir, CorpusLayout) {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let input = tmp.path().join("Input_texts");
    fs::create_dir_all(&input).expect("failed to create input dir");
    let layout = CorpusLayout::new(input, tmp.path().join("database"));
    (tmp, layout)
}

pub fn tagger() -> LexiconTagger {
    LexiconTagger::from_file(&fixture_lexicon()).expect("fixture lexicon should load")
}

pub fn ingest(layout: &CorpusLayout) -> lexfreq::ingest::IngestStats {
    ingest_with(layout, &Stoplist::builtin())
}

pub fn ingest_with(layout: &CorpusLayout, stoplist: &Stoplist) -> lexfreq::ingest::IngestStats {
    lexfreq::ingest::run_ingest(layout, stoplist, &mut tagger()).expect("ingest should succeed")
}

pub fn read_database(layout: &CorpusLayout) -> FrequencyDatabase {
    store::read_json(&layout.database_path())
        .expect("database should parse")
        .expect("database should exist")
}

pub fn read_manifest(layout: &CorpusLayout) -> StoredManifest {
    store::read_json(&layout.manifest_path())
        .expect("manifest should parse")
        .expect("manifest should exist")
}

/// Sets a file's mtime to `secs` after the epoch.
pub fn set_mtime(path: &Path, secs: u64) {
    set_mtime_exact(path, Duration::from_secs(secs));
}

pub fn set_mtime_exact(path: &Path, since_epoch: Duration) {
    let file = fs::File::options()
        .write(true)
        .open(path)
        .expect("should open file for mtime update");
    file.set_modified(UNIX_EPOCH + since_epoch)
        .expect("should set mtime");
}

/// Pins every fixture document to a sub-second mtime whose f64 seconds
/// value needs all 17 significant digits to be read back exactly.
pub fn pin_fractional_mtimes(layout: &CorpusLayout) {
    set_mtime_exact(
        &layout.document_path("a.txt"),
        Duration::new(1_792_316_930, 123_458_100),
    );
    set_mtime_exact(
        &layout.document_path("b.txt"),
        Duration::new(1_792_316_931, 987_654_321),
    );
}

/// Writes `content` to `path` and pins its mtime to `secs`.
pub fn write_doc(path: &Path, content: &str, secs: u64) {
    fs::write(path, content).expect("should write document");
    set_mtime(path, secs);
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs()
}

/// Same corpus, separate state directory.
pub fn with_db_dir(layout: &CorpusLayout, db_dir: PathBuf) -> CorpusLayout {
    CorpusLayout::new(layout.input_dir.clone(), db_dir).with_pattern(layout.pattern.clone())
}
