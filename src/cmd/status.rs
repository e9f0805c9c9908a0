use lexfreq::ingest::aggregate::FrequencyDatabase;
use lexfreq::ingest::normalize::PartOfSpeech;
use lexfreq::store::{self, StoredManifest};

use crate::cmd::Cli;

pub fn run(cli: &Cli) {
    let layout = cli.layout();
    let db_path = layout.database_path();
    let manifest_path = layout.manifest_path();

    println!("lexfreq status");
    println!("  input dir      : {}", layout.input_dir.display());
    println!("  database       : {}", db_path.display());

    match store::read_json::<FrequencyDatabase>(&db_path) {
        Ok(Some(db)) => {
            println!("  unique entries : {}", db.len());
            for pos in PartOfSpeech::ALL {
                println!("    {:<12} : {}", pos.plural_label().to_lowercase(), db.distinct(pos));
            }
            println!("  tokens counted : {}", db.total_tokens());
        }
        Ok(None) => println!("  unique entries : (no database yet)"),
        Err(err) => eprintln!("warning: {}", err),
    }

    match store::read_json::<StoredManifest>(&manifest_path) {
        Ok(Some(StoredManifest::Timestamped(manifest))) => {
            println!("  files ingested : {}", manifest.len());
            if layout.input_dir.is_dir() {
                let missing = manifest
                    .iter()
                    .filter(|(name, _)| !layout.document_path(name).exists())
                    .count();
                if missing > 0 {
                    println!("  no longer present: {} (counts kept)", missing);
                }
            }
        }
        Ok(Some(StoredManifest::Legacy(names))) => {
            println!("  files ingested : {} (legacy log without timestamps)", names.len());
            println!("warning: next run will rebuild the database from scratch.");
        }
        Ok(None) => println!("  files ingested : (no log yet)"),
        Err(err) => eprintln!("warning: {}", err),
    }

    let report_path = layout.report_path();
    if report_path.is_file() {
        println!("  phrase report  : {}", report_path.display());
    }
}
