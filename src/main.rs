mod cli;
mod config;
mod convert;
mod crops_cmd;
mod logging;
mod prompt;
mod render;
mod schedule_cmd;
mod status_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = convert::load_catalog(cli.config.as_deref())?;
    match cli.command.unwrap_or_else(|| Command::Status(Default::default())) {
        Command::Crops => crops_cmd::run(&catalog),
        Command::Status(args) => status_cmd::run(args, &catalog),
        Command::Schedule(args) => schedule_cmd::run(args, &catalog),
    }
}
