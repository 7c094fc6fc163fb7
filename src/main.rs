mod analyze_cmd;
mod bayes_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod output;
mod passage_cmd;
mod rewards_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Passage(args) => passage_cmd::run(args),
        Command::Rewards(args) => rewards_cmd::run(args),
        Command::Bayes(args) => bayes_cmd::run(args),
    }
}
