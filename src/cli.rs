use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ergo Markov chain analysis engine.
#[derive(Parser)]
#[command(
    name = "ergo",
    version,
    about = "Structural and probabilistic analysis of discrete-time Markov chains"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify states and compute steady states, hitting probabilities and period.
    Analyze(AnalyzeArgs),
    /// First-passage time distribution from a start state.
    Passage(PassageArgs),
    /// Finite-horizon expected rewards.
    Rewards(RewardsArgs),
    /// Prior and predictive log-probabilities under Dirichlet priors.
    Bayes(BayesArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ergo.toml")]
    pub config: PathBuf,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `passage` subcommand.
#[derive(clap::Args)]
pub struct PassageArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override `[passage].start`.
    #[arg(long)]
    pub start: Option<String>,

    /// Override `[passage].horizon`.
    #[arg(long)]
    pub horizon: Option<usize>,
}

/// Arguments for the `rewards` subcommand.
#[derive(clap::Args)]
pub struct RewardsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override `[rewards].horizon`.
    #[arg(long)]
    pub horizon: Option<usize>,
}

/// Arguments for the `bayes` subcommand.
#[derive(clap::Args)]
pub struct BayesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
