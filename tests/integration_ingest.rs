mod common;

use std::fs;
use std::time::Duration;

use lexfreq::error::LfError;
use lexfreq::ingest::aggregate::FrequencyDatabase;
use lexfreq::ingest::changes::RebuildReason;
use lexfreq::ingest::document_keys;
use lexfreq::ingest::normalize::{Normalizer, PartOfSpeech};
use lexfreq::store::StoredManifest;
use lexfreq::text::Stoplist;

use PartOfSpeech::{Adjective, Noun, Verb};

// ── First run ───────────────────────────────────────────────────────────────

#[test]
fn adverbs_fold_into_adjectives_and_stoplist_applies() {
    let (_tmp, layout) = common::empty_corpus();
    fs::write(
        layout.document_path("whales.txt"),
        "Blorptastic whales swim swiftly. Blorptastic whales swim swiftly again.",
    )
    .unwrap();

    let stats = common::ingest(&layout);
    assert_eq!(stats.processed, vec!["whales.txt"]);
    assert!(stats.failed.is_empty());
    assert!(stats.saved);

    let db = common::read_database(&layout);
    assert_eq!(db.count("blorptastic", Adjective), 2);
    assert_eq!(db.count("whales", Noun), 2);
    assert_eq!(db.count("swim", Verb), 2);
    assert_eq!(db.count("swift", Adjective), 2);
    assert_eq!(db.len(), 4, "no entry for 'again' or punctuation: {:?}", db);
    assert!(db.iter().all(|(key, _)| !key.starts_with("again")));
}

#[test]
fn database_json_uses_canonical_keys() {
    let (_tmp, layout) = common::empty_corpus();
    fs::write(layout.document_path("a.txt"), "whales swim").unwrap();
    common::ingest(&layout);

    let raw = fs::read_to_string(layout.database_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["whales_NOUN"]["lemma"], "whales");
    assert_eq!(json["whales_NOUN"]["type"], "NOUN");
    assert_eq!(json["whales_NOUN"]["count"], 1);
    assert_eq!(json["swim_VERB"]["count"], 1);
    assert!(raw.ends_with('\n'));
}

#[test]
fn counts_equal_the_sum_over_documents() {
    let (_tmp, layout) = common::isolated_corpus();
    let stats = common::ingest(&layout);
    assert_eq!(stats.processed, vec!["a.txt", "b.txt"]);

    // Recompute straight from the tagger, document by document.
    let stoplist = Stoplist::builtin();
    let normalizer = Normalizer::new(&stoplist);
    let mut tagger = common::tagger();
    let mut expected = FrequencyDatabase::new();
    for name in ["a.txt", "b.txt"] {
        let keys = document_keys(&layout.document_path(name), &mut tagger, &normalizer).unwrap();
        expected.fold_all(keys);
    }

    let db = common::read_database(&layout);
    assert_eq!(db, expected);
    assert_eq!(db.count("coral", Noun), 3);
    assert_eq!(db.count("marine", Adjective), 3);
    assert_eq!(db.count("ecosystem", Noun), 3);
    assert_eq!(db.count("decline", Verb), 1);
    // "face" is on the built-in stoplist even when tagged as a verb
    assert_eq!(db.count("face", Verb), 0);
}

#[test]
fn non_matching_files_are_ignored() {
    let (_tmp, layout) = common::isolated_corpus();
    let stats = common::ingest(&layout);
    assert!(!stats.processed.iter().any(|n| n == "README.md"));
    assert!(!common::read_manifest(&layout).migrate().contains("README.md"));
}

#[test]
fn custom_stoplist_excludes_lemma_under_every_tag() {
    let (_tmp, layout) = common::empty_corpus();
    fs::write(layout.document_path("a.txt"), "whales swim swiftly. Swim!").unwrap();

    let stoplist = Stoplist::from_words(["swim", "swiftly"]);
    common::ingest_with(&layout, &stoplist);

    let db = common::read_database(&layout);
    assert_eq!(db.count("whales", Noun), 1);
    assert_eq!(db.count("swim", Verb), 0);
    assert_eq!(db.count("swift", Adjective), 0);
    assert_eq!(db.len(), 1);
}

// ── Incremental runs ────────────────────────────────────────────────────────

#[test]
fn second_run_without_changes_is_byte_identical() {
    let (_tmp, layout) = common::isolated_corpus();
    common::pin_fractional_mtimes(&layout);
    common::ingest(&layout);
    let db_before = fs::read(layout.database_path()).unwrap();
    let manifest_before = fs::read(layout.manifest_path()).unwrap();

    let stats = common::ingest(&layout);
    assert!(stats.plan.is_noop());
    assert!(!stats.saved);
    assert!(stats.processed.is_empty());

    assert_eq!(fs::read(layout.database_path()).unwrap(), db_before);
    assert_eq!(fs::read(layout.manifest_path()).unwrap(), manifest_before);
}

#[test]
fn fractional_mtimes_are_not_mistaken_for_edits() {
    for nanos in [123_458_100, 1, 999_999_999, 500_000_001, 314_159_265, 271_828_182] {
        let (_tmp, layout) = common::empty_corpus();
        let doc = layout.document_path("a.txt");
        fs::write(&doc, "whales swim").unwrap();
        common::set_mtime_exact(&doc, Duration::new(1_792_316_930, nanos));

        common::ingest(&layout);
        let stats = common::ingest(&layout);
        assert!(
            stats.plan.is_noop(),
            "mtime .{:09} read back as changed: {:?}",
            nanos,
            stats.plan
        );
        assert!(stats.plan.modified.is_empty());
    }
}

#[test]
fn new_file_is_added_without_recounting_old_ones() {
    let (_tmp, layout) = common::isolated_corpus();
    common::pin_fractional_mtimes(&layout);
    common::ingest(&layout);
    let coral_before = common::read_database(&layout).count("coral", Noun);

    fs::write(layout.document_path("c.txt"), "Blorptastic whales swim.").unwrap();
    let stats = common::ingest(&layout);

    assert!(!stats.plan.full_rebuild);
    assert_eq!(stats.plan.added, vec!["c.txt"]);
    assert_eq!(stats.processed, vec!["c.txt"]);

    let db = common::read_database(&layout);
    assert_eq!(db.count("coral", Noun), coral_before);
    assert_eq!(db.count("whales", Noun), 1);
    assert_eq!(common::read_manifest(&layout).migrate().len(), 3);
}

#[test]
fn modified_file_rebuilds_to_the_same_state_as_a_fresh_run() {
    let (tmp, layout) = common::isolated_corpus();
    let base = common::now_secs() - 10_000;
    common::set_mtime(&layout.document_path("a.txt"), base);
    common::set_mtime(&layout.document_path("b.txt"), base);
    common::ingest(&layout);

    common::write_doc(
        &layout.document_path("a.txt"),
        "Blorptastic whales swim swiftly past the coral reef.",
        base + 60,
    );
    let stats = common::ingest(&layout);
    assert!(stats.plan.full_rebuild);
    assert_eq!(stats.plan.reason, Some(RebuildReason::ModifiedFiles));
    assert_eq!(stats.plan.modified, vec!["a.txt"]);
    assert_eq!(stats.processed, vec!["a.txt", "b.txt"]);

    let fresh = common::with_db_dir(&layout, tmp.path().join("fresh"));
    common::ingest(&fresh);

    assert_eq!(
        fs::read(layout.database_path()).unwrap(),
        fs::read(fresh.database_path()).unwrap()
    );
    assert_eq!(
        fs::read(layout.manifest_path()).unwrap(),
        fs::read(fresh.manifest_path()).unwrap()
    );
    assert_eq!(common::read_database(&layout).count("coral", Noun), 2);
}

#[test]
fn deleted_file_keeps_its_counts() {
    let (_tmp, layout) = common::isolated_corpus();
    common::pin_fractional_mtimes(&layout);
    common::ingest(&layout);
    let db_before = fs::read(layout.database_path()).unwrap();

    fs::remove_file(layout.document_path("b.txt")).unwrap();
    let stats = common::ingest(&layout);

    assert!(stats.plan.is_noop());
    assert_eq!(stats.plan.stale, vec!["b.txt"]);
    assert_eq!(fs::read(layout.database_path()).unwrap(), db_before);
    assert!(common::read_manifest(&layout).migrate().contains("b.txt"));
}

#[test]
fn legacy_manifest_is_migrated_by_rebuilding() {
    let (_tmp, layout) = common::isolated_corpus();
    fs::create_dir_all(&layout.db_dir).unwrap();
    fs::write(
        layout.database_path(),
        r#"{"ghost_NOUN": {"lemma": "ghost", "type": "NOUN", "count": 99}}"#,
    )
    .unwrap();
    fs::write(layout.manifest_path(), r#"["a.txt", "b.txt"]"#).unwrap();

    let stats = common::ingest(&layout);
    assert!(stats.plan.full_rebuild);
    assert_eq!(stats.plan.reason, Some(RebuildReason::LegacyManifest));
    assert_eq!(stats.previous_entries, 1);

    let db = common::read_database(&layout);
    assert!(db.get("ghost_NOUN").is_none());
    assert_eq!(db.count("coral", Noun), 3);

    match common::read_manifest(&layout) {
        StoredManifest::Timestamped(manifest) => {
            assert_eq!(manifest.len(), 2);
            assert!(manifest.get("a.txt").is_some_and(|ts| ts > 0.0));
        }
        StoredManifest::Legacy(_) => panic!("manifest should have been rewritten as a map"),
    }
}

#[test]
fn unreadable_document_is_retried_next_run() {
    let (tmp, layout) = common::isolated_corpus();
    fs::write(layout.document_path("c.txt"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let stats = common::ingest(&layout);
    assert_eq!(stats.processed, vec!["a.txt", "b.txt"]);
    assert_eq!(stats.failed.len(), 1);
    assert_eq!(stats.failed[0].0, "c.txt");
    assert!(matches!(stats.failed[0].1, LfError::DocumentRead { .. }));
    assert!(!common::read_manifest(&layout).migrate().contains("c.txt"));

    fs::write(layout.document_path("c.txt"), "Blorptastic whales swim.").unwrap();
    let stats = common::ingest(&layout);
    assert!(!stats.plan.full_rebuild);
    assert_eq!(stats.processed, vec!["c.txt"]);

    let fresh = common::with_db_dir(&layout, tmp.path().join("fresh"));
    common::ingest(&fresh);
    assert_eq!(common::read_database(&layout), common::read_database(&fresh));
}

#[test]
fn missing_input_directory_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = lexfreq::config::CorpusLayout::new(
        tmp.path().join("Input_texts"),
        tmp.path().join("database"),
    );

    let result = lexfreq::ingest::run_ingest(&layout, &Stoplist::builtin(), &mut common::tagger());
    assert!(matches!(result, Err(LfError::MissingInputDirectory(_))));
    assert!(!layout.database_path().exists());
    assert!(!layout.manifest_path().exists());
}

#[test]
fn empty_input_directory_is_a_noop() {
    let (_tmp, layout) = common::empty_corpus();
    let stats = common::ingest(&layout);
    assert!(stats.plan.is_noop());
    assert!(!stats.saved);
    assert_eq!(stats.entries, 0);
    assert!(!layout.database_path().exists());
}
