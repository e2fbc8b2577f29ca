//! Runtime ranking CLI entry point.

use clap::Parser;
use runtime_ranking_cli::{logging, Cli};

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = runtime_ranking_cli::run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
