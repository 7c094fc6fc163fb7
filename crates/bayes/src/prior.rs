//! Dirichlet prior density of a transition matrix.

use statrs::function::gamma::ln_gamma;
use tracing::debug;

use crate::error::BayesError;
use crate::hyper::validate_hyperparameters;
use crate::labeled::{LabeledMatrix, sorted_labels};

/// Tolerance on transition row sums for the prior density.
pub const ROW_SUM_TOLERANCE: f64 = 1e-10;

/// Log-density of each row of `transition` under independent Dirichlet
/// priors, one per state.
///
/// For a row `p` with concentration `α` the value is
/// `Σ_j (α_j - 1) ln p_j - ln Γ(α_j)` plus `ln Γ(Σ_j α_j)`. Both matrices
/// are aligned to sorted label order, which is also the order of the
/// result. Without hyperparameters every `α_j` is one.
///
/// A zero probability with `α_j = 1` contributes nothing; with `α_j > 1`
/// the density is zero and the log is `-inf`.
///
/// # Errors
///
/// Returns [`BayesError::EntryOutOfRange`] or [`BayesError::RowSumMismatch`]
/// for a transition matrix that is not row-stochastic, label errors for
/// inconsistent or mismatched label sets,
/// [`BayesError::DimensionMismatch`] if the hyperparameters have a
/// different order, and [`BayesError::HyperparameterBelowOne`].
#[tracing::instrument(skip_all, fields(n_states = transition.n_states()))]
pub fn prior_log_probability(
    transition: &LabeledMatrix,
    hyper: Option<&LabeledMatrix>,
) -> Result<Vec<(String, f64)>, BayesError> {
    check_stochastic(transition)?;
    transition.check_label_sets()?;

    let transition = transition.sorted();
    let hyper = match hyper {
        Some(h) => {
            if h.n_states() != transition.n_states() {
                return Err(BayesError::DimensionMismatch {
                    what: "hyperparameter order",
                    expected: transition.n_states(),
                    found: h.n_states(),
                });
            }
            validate_hyperparameters(h)?;
            if sorted_labels(h.rows()) != sorted_labels(transition.rows()) {
                return Err(BayesError::LabelSetMismatch {
                    reason: "hyperparameter and transition states differ".to_string(),
                });
            }
            h.sorted()
        }
        None => LabeledMatrix::ones(transition.rows().to_vec()),
    };

    let p = transition.values();
    let alpha = hyper.values();
    let out: Vec<(String, f64)> = transition
        .rows()
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let mut log_prob = 0.0;
            let mut alpha_sum = 0.0;
            for j in 0..p.ncols() {
                let a = alpha[(i, j)];
                alpha_sum += a;
                if a != 1.0 {
                    log_prob += (a - 1.0) * p[(i, j)].ln();
                }
                log_prob -= ln_gamma(a);
            }
            (state.clone(), log_prob + ln_gamma(alpha_sum))
        })
        .collect();

    debug!(n_rows = out.len(), "prior log-densities computed");
    Ok(out)
}

fn check_stochastic(transition: &LabeledMatrix) -> Result<(), BayesError> {
    let p = transition.values();
    for (i, row) in transition.rows().iter().enumerate() {
        let mut sum = 0.0;
        for (j, col) in transition.cols().iter().enumerate() {
            let value = p[(i, j)];
            if !(0.0..=1.0).contains(&value) {
                return Err(BayesError::EntryOutOfRange {
                    row: row.clone(),
                    col: col.clone(),
                    value,
                });
            }
            sum += value;
        }
        if (sum - 1.0).abs() >= ROW_SUM_TOLERANCE {
            return Err(BayesError::RowSumMismatch {
                row: row.clone(),
                sum,
            });
        }
    }
    Ok(())
}
