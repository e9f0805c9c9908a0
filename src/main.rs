mod cmd;

use clap::Parser;
use cmd::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        None | Some(Command::Run) => cmd::run::run(&cli),
        Some(Command::Ingest) => {
            if !cmd::run::run_ingest(&cli) {
                std::process::exit(1);
            }
        }
        Some(Command::Phrases) => {
            if !cmd::run::run_phrases(&cli) {
                std::process::exit(1);
            }
        }
        Some(Command::Top(args)) => cmd::top::run(&cli, args),
        Some(Command::Status) => cmd::status::run(&cli),
    }
}
