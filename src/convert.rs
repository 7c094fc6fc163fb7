//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use nalgebra::{DMatrix, DVector};

use ergo_bayes::LabeledMatrix;
use ergo_chain::{MarkovChain, Orientation};
use ergo_steady::SteadyConfig;

use crate::config::*;

/// Parses an orientation name into the corresponding enum variant.
pub fn parse_orientation(s: &str) -> Result<Orientation> {
    match s.to_lowercase().as_str() {
        "by_row" | "row" => Ok(Orientation::ByRow),
        "by_column" | "column" => Ok(Orientation::ByColumn),
        other => bail!("unknown orientation: {other:?}"),
    }
}

/// Packs nested rows into a matrix, rejecting ragged input.
pub fn rows_to_matrix(rows: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some(i) = rows.iter().position(|r| r.len() != n_cols) {
        bail!(
            "matrix row {i} has {} entries, expected {n_cols}",
            rows[i].len()
        );
    }
    Ok(DMatrix::from_fn(rows.len(), n_cols, |i, j| rows[i][j]))
}

/// Builds a validated [`MarkovChain`] from the `[chain]` section.
pub fn build_chain(chain: &ChainToml) -> Result<MarkovChain> {
    let orientation = parse_orientation(&chain.orientation)?;
    let matrix = rows_to_matrix(&chain.matrix)?;
    MarkovChain::new(matrix, chain.states.clone(), orientation).context("invalid [chain]")
}

/// Returns the `[chain]` section or explains that it is required.
pub fn require_chain(config: &ErgoConfig) -> Result<MarkovChain> {
    let chain = config
        .chain
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no chain: add a [chain] section to the config"))?;
    build_chain(chain)
}

/// Builds a [`SteadyConfig`] from the `[steady]` section.
pub fn build_steady_config(steady: &SteadyToml) -> Result<SteadyConfig> {
    let cfg = SteadyConfig::new()
        .with_eigen_tolerance(steady.eigen_tolerance)
        .with_symmetry_tolerance(steady.symmetry_tolerance)
        .with_negative_tolerance(steady.negative_tolerance)
        .with_zero_sum_fallback(steady.zero_sum_fallback);
    cfg.validate().context("invalid [steady]")?;
    Ok(cfg)
}

/// Builds the hyperparameter matrix from `[bayes.hyperparameters]`.
pub fn build_hyperparameters(hyper: &HyperToml) -> Result<LabeledMatrix> {
    let values = rows_to_matrix(&hyper.matrix)?;
    let cols = hyper.cols.clone().unwrap_or_else(|| hyper.states.clone());
    LabeledMatrix::new(values, hyper.states.clone(), cols)
        .context("invalid [bayes.hyperparameters]")
}

/// Resolves a state name against the chain's labels.
pub fn state_index(chain: &MarkovChain, state: &str) -> Result<usize> {
    chain
        .state_index(state)
        .with_context(|| format!("state {state:?} is not one of {:?}", chain.states()))
}

/// Converts per-state rewards listed in state order into a vector.
pub fn build_rewards(values: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(values)
}
