//! JSON report types and writing.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::DMatrix;
use serde::Serialize;
use tracing::info;

/// Output of `ergo analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    pub states: Vec<String>,
    pub orientation: &'static str,
    pub communicating_classes: Vec<Vec<String>>,
    pub closed_classes: Vec<Vec<String>>,
    pub recurrent_classes: Vec<Vec<String>>,
    pub transient_classes: Vec<Vec<String>>,
    pub recurrent_states: Vec<String>,
    pub transient_states: Vec<String>,
    pub absorbing_states: Vec<String>,
    pub irreducible: bool,
    /// 0 when the chain is not irreducible.
    pub period: usize,
    pub canonical_form: LabeledRows,
    /// In the chain's orientation: one row (or column) per recurrent class.
    pub steady_states: Vec<Vec<f64>>,
    pub hitting_probabilities: LabeledRows,
}

/// A matrix together with the labels of its rows and columns.
#[derive(Debug, Serialize)]
pub struct LabeledRows {
    pub states: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Output of `ergo passage`.
#[derive(Debug, Serialize)]
pub struct PassageReport {
    pub start: String,
    pub horizon: usize,
    /// Step `m` (from 1) -> first-visit probability per state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_state: Option<Vec<BTreeMap<String, f64>>>,
    /// Targets the aggregate was summed over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Vec<f64>>,
}

/// Output of `ergo rewards`.
#[derive(Debug, Serialize)]
pub struct RewardsReport {
    pub horizon: usize,
    pub expected_rewards: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_before_hitting: Option<f64>,
}

/// Output of `ergo bayes`.
#[derive(Debug, Default, Serialize)]
pub struct BayesReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_log_probability: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictive_log_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posterior_mean: Option<LabeledRows>,
}

/// Copies a matrix into nested rows.
pub fn matrix_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter().map(|r| r.iter().copied().collect()).collect()
}

/// Writes `report` as pretty JSON to `output`, or to stdout when absent.
pub fn write_json<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialise report")?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
