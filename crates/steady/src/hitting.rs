//! Absorption ("hitting") probabilities by first-step analysis.

use ergo_chain::MarkovChain;
use ergo_structure::{Classification, classify};
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use tracing::debug;

use crate::error::SteadyError;

/// Hitting probabilities of a chain, in its own orientation.
///
/// For a row-oriented chain entry `(i, j)` is the probability of ever
/// visiting `j` from `i`; a column-oriented chain gets the transpose.
///
/// # Errors
///
/// See [`hitting_probabilities_by_row`].
pub fn hitting_probabilities(chain: &MarkovChain) -> Result<DMatrix<f64>, SteadyError> {
    let result = hitting_probabilities_by_row(&chain.by_row_matrix())?;
    Ok(chain.restore_orientation(result))
}

/// Hitting probabilities of a row-stochastic matrix.
///
/// One linear system is solved per target column. Rows of states in a
/// closed class are pinned to 1 when the target lies in that class and to
/// 0 otherwise; the remaining rows follow
/// `h(i) = P(i, j) + Σ_{k≠j} P(i, k) h(k)`.
///
/// # Errors
///
/// Returns [`SteadyError::Structure`] for a non-square matrix and
/// [`SteadyError::SingularSystem`] when a target's system cannot be solved.
#[tracing::instrument(skip_all, fields(n_states = p.nrows()))]
pub fn hitting_probabilities_by_row(p: &DMatrix<f64>) -> Result<DMatrix<f64>, SteadyError> {
    let classification = classify(p)?;
    let n = classification.n_states();
    if n == 0 {
        return Ok(DMatrix::zeros(0, 0));
    }

    let columns = (0..n)
        .into_par_iter()
        .map(|target| solve_target(p, &classification, target))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(n_targets = n, "hitting probabilities solved");
    Ok(DMatrix::from_columns(&columns))
}

fn solve_target(
    p: &DMatrix<f64>,
    classification: &Classification,
    target: usize,
) -> Result<DVector<f64>, SteadyError> {
    let n = p.nrows();
    let mut coeffs = p.clone();
    let mut rhs = DVector::from_fn(n, |i, _| -p[(i, target)]);

    for i in 0..n {
        if classification.is_closed(i) {
            coeffs.row_mut(i).fill(0.0);
            coeffs[(i, i)] = 1.0;
            rhs[i] = if classification.communicates(i, target) {
                1.0
            } else {
                0.0
            };
        } else {
            coeffs[(i, target)] = 0.0;
            coeffs[(i, i)] -= 1.0;
        }
    }

    let h = coeffs
        .lu()
        .solve(&rhs)
        .ok_or(SteadyError::SingularSystem { target })?;
    if h.iter().any(|v| !v.is_finite()) {
        return Err(SteadyError::SingularSystem { target });
    }
    Ok(h)
}
