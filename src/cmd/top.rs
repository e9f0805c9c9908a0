use lexfreq::error::LfError;
use lexfreq::ingest::aggregate::FrequencyDatabase;
use lexfreq::ingest::normalize::PartOfSpeech;
use lexfreq::store;

use crate::cmd::{Cli, TopArgs};

pub fn run(cli: &Cli, args: &TopArgs) {
    let path = cli.layout().database_path();
    let db: FrequencyDatabase = match store::read_json(&path) {
        Ok(Some(db)) => db,
        Ok(None) => {
            eprintln!(
                "error: no database found at {}. Run `lexfreq ingest` first.",
                path.display()
            );
            std::process::exit(1);
        }
        Err(LfError::MalformedState { .. }) => {
            eprintln!(
                "error: corrupt database at {}. Run `lexfreq ingest` to rebuild.",
                path.display()
            );
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: failed to read database: {}", err);
            std::process::exit(1);
        }
    };

    println!("--- DATABASE REPORT ---");
    println!("Total unique lemmas found: {}", db.len());

    let classes: Vec<PartOfSpeech> = match args.pos {
        Some(pos) => vec![pos],
        None => PartOfSpeech::ALL.to_vec(),
    };

    for (i, pos) in classes.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "=".repeat(30));
        }
        println!("\n--- TOP {} {} ---", args.limit, pos.plural_label());
        for (rank, entry) in db.top(*pos, args.limit).iter().enumerate() {
            println!("{}. {} ({})", rank + 1, entry.lemma, entry.count);
        }
    }
}
