//! Autodiag Control - CLI for the vehicle fault diagnosis expert system
//!
//! Gathers symptoms from flags, config or an interactive interview and
//! prints every matching diagnosis.

use anyhow::Result;
use autodiag_shared::config::Config;
use autodiagctl::cli::Cli;
use autodiagctl::{errors, logging, run};
use clap::Parser;
use std::io;
use tracing::info;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    info!("autodiagctl v{} starting", env!("CARGO_PKG_VERSION"));

    let code = match execute(&cli) {
        Ok(()) => errors::EXIT_SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}

fn execute(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run::run(cli, &config, stdin, &mut stdout, &mut stderr)
}
