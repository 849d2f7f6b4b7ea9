mod cli;
mod convert;
mod error;
mod logging;

use crate::cli::Cli;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> error::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("tracktable v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("CLI arguments parsed: {:?}", &cli);

    let result = convert::run(&cli);
    match &result {
        Ok(_) => info!("Conversion completed successfully."),
        Err(e) => error!("Conversion failed: {e}"),
    }
    result
}
