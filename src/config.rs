use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Ergo configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErgoConfig {
    /// The chain to analyse. Optional for `bayes`, which can work from
    /// sequences alone.
    #[serde(default)]
    pub chain: Option<ChainToml>,

    /// Steady-state solver settings.
    #[serde(default)]
    pub steady: SteadyToml,

    /// First-passage settings.
    #[serde(default)]
    pub passage: Option<PassageToml>,

    /// Reward settings.
    #[serde(default)]
    pub rewards: Option<RewardsToml>,

    /// Bayesian inference settings.
    #[serde(default)]
    pub bayes: BayesToml,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<ErgoConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainToml {
    pub states: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    #[serde(default = "default_orientation")]
    pub orientation: String,
}

fn default_orientation() -> String {
    "by_row".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SteadyToml {
    #[serde(default = "default_eigen_tolerance")]
    pub eigen_tolerance: f64,
    #[serde(default = "default_small_tolerance")]
    pub symmetry_tolerance: f64,
    #[serde(default = "default_small_tolerance")]
    pub negative_tolerance: f64,
    #[serde(default = "default_true")]
    pub zero_sum_fallback: bool,
}

impl Default for SteadyToml {
    fn default() -> Self {
        Self {
            eigen_tolerance: default_eigen_tolerance(),
            symmetry_tolerance: default_small_tolerance(),
            negative_tolerance: default_small_tolerance(),
            zero_sum_fallback: true,
        }
    }
}

fn default_eigen_tolerance() -> f64 {
    1e-7
}
fn default_small_tolerance() -> f64 {
    1e-12
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassageToml {
    pub start: String,
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// When set, report the first-passage mass summed over these states.
    #[serde(default)]
    pub targets: Option<Vec<String>>,
}

fn default_horizon() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewardsToml {
    /// One reward per state, in `[chain].states` order.
    pub values: Vec<f64>,
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// When set, also report the reward collected from this state.
    #[serde(default)]
    pub start: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BayesToml {
    #[serde(default)]
    pub prior_sequence: Vec<String>,
    #[serde(default)]
    pub new_sequence: Vec<String>,
    #[serde(default)]
    pub hyperparameters: Option<HyperToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HyperToml {
    pub states: Vec<String>,
    /// Column labels when they are listed in a different order from rows.
    #[serde(default)]
    pub cols: Option<Vec<String>>,
    pub matrix: Vec<Vec<f64>>,
}
