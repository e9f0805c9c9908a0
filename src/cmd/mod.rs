pub mod run;
pub mod status;
pub mod top;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use lexfreq::config::{CorpusLayout, DEFAULT_DB_DIR, DEFAULT_INPUT_DIR, DEFAULT_PATTERN};
use lexfreq::ingest::normalize::PartOfSpeech;
use lexfreq::phrases::CollocationConfig;
use lexfreq::text::{LexiconTagger, Stoplist};

#[derive(Parser)]
#[command(
    name = "lexfreq",
    about = "Word-frequency database and collocation report for a text corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the documents
    #[arg(long = "input", default_value = DEFAULT_INPUT_DIR, global = true)]
    pub input: PathBuf,

    /// Directory for the database, manifest and phrase report
    #[arg(long = "db-dir", default_value = DEFAULT_DB_DIR, global = true)]
    pub db_dir: PathBuf,

    /// File name glob selecting documents
    #[arg(long = "pattern", default_value = DEFAULT_PATTERN, global = true)]
    pub pattern: String,

    /// Word list replacing the built-in stoplist
    #[arg(long = "stoplist", global = true)]
    pub stoplist: Option<PathBuf>,

    /// Tagger lexicon (surface<TAB>lemma<TAB>UPOS per line)
    #[arg(long = "lexicon", global = true)]
    pub lexicon: Option<PathBuf>,

    #[command(flatten)]
    pub phrases: PhraseArgs,
}

#[derive(Args)]
pub struct PhraseArgs {
    /// Minimum occurrences before a phrase is scored
    #[arg(long = "min-freq", default_value_t = 3, global = true)]
    pub min_freq: u64,

    /// Number of bigrams in the report
    #[arg(long = "bigrams", default_value_t = 30, global = true)]
    pub bigrams: usize,

    /// Number of trigrams in the report
    #[arg(long = "trigrams", default_value_t = 20, global = true)]
    pub trigrams: usize,
}

#[derive(Subcommand)]
pub enum Command {
    /// Update the frequency database, then rebuild the phrase report (default)
    Run,
    /// Update the frequency database only
    Ingest,
    /// Rebuild the phrase report only
    Phrases,
    /// Show the most frequent words per part of speech
    Top(TopArgs),
    /// Show database and manifest status
    Status,
}

#[derive(Args)]
pub struct TopArgs {
    /// Restrict to one part of speech (noun, verb, adj)
    #[arg(long = "pos")]
    pub pos: Option<PartOfSpeech>,

    /// Entries shown per part of speech
    #[arg(short = 'n', long = "limit", default_value_t = 100)]
    pub limit: usize,
}

impl Cli {
    pub fn layout(&self) -> CorpusLayout {
        CorpusLayout::new(&self.input, &self.db_dir).with_pattern(self.pattern.clone())
    }

    pub fn collocation_config(&self) -> CollocationConfig {
        CollocationConfig {
            min_freq: self.phrases.min_freq,
            bigram_limit: self.phrases.bigrams,
            trigram_limit: self.phrases.trigrams,
            ..Default::default()
        }
    }

    /// Built-in stoplist, or `--stoplist`. Exits on an unreadable file.
    pub fn stoplist(&self) -> Stoplist {
        match &self.stoplist {
            None => Stoplist::builtin(),
            Some(path) => match Stoplist::from_file(path) {
                Ok(list) => list,
                Err(err) => {
                    eprintln!("error: cannot load stoplist '{}': {}", path.display(), err);
                    std::process::exit(1);
                }
            },
        }
    }

    /// Tagger from `--lexicon`, or suffix rules only. Exits on failure.
    pub fn tagger(&self) -> LexiconTagger {
        let result = match &self.lexicon {
            None => LexiconTagger::new(),
            Some(path) => LexiconTagger::from_file(path),
        };
        match result {
            Ok(tagger) => tagger,
            Err(err) => {
                eprintln!("error: cannot set up tagger: {}", err);
                std::process::exit(1);
            }
        }
    }
}
