//! namefind - provider name lookup
//!
//! ## Usage
//!
//! ```bash
//! namefind --data roster.csv "Jon Smith"
//! namefind --data roster.csv --min-score 80 --export result.csv "Jon Smyth"
//! namefind --data roster.csv --lang es        # interactive session
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use namefind::config::{Cli, LookupConfig};
use namefind::session::Session;
use namefind::{loader, logging, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_with_filter("debug");
    } else {
        logging::init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LookupConfig::try_from(cli)?;

    let registry = loader::load_registry(&config.data)?;
    info!(
        entries = registry.len(),
        limit = config.options.limit,
        min_score = config.options.min_score,
        lang = %config.locale,
        "Starting namefind"
    );

    let mut session = Session::new(registry, config.options, config.locale).json(config.json);

    match config.query {
        Some(query) => {
            let aliased = session.search(&query)?.clone();
            print!("{}", session.render(&aliased)?);
            if let Some(path) = &config.export {
                session.export_last(path)?;
                println!(
                    "{} {}",
                    config.locale.messages().exported,
                    path.display()
                );
            }
        }
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}
