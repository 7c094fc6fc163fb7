//! Conjugate posterior of the transition rows.

use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::counts::TransitionCounts;
use crate::error::BayesError;
use crate::hyper::resolve;
use crate::labeled::LabeledMatrix;

/// Posterior Dirichlet concentrations after observing `sequence`: the
/// prior hyperparameters plus the transition counts, in sorted label order.
///
/// # Errors
///
/// As [`predictive_log_probability`](crate::predictive_log_probability).
pub fn posterior_hyperparameters<S: AsRef<str>>(
    sequence: &[S],
    hyper: Option<&LabeledMatrix>,
) -> Result<LabeledMatrix, BayesError> {
    let observed: BTreeSet<&str> = sequence.iter().map(AsRef::as_ref).collect();
    let alpha = resolve(&observed, hyper)?;
    let counts = TransitionCounts::from_sequence(sequence, alpha.rows())?;
    LabeledMatrix::with_states(alpha.values() + counts.counts(), alpha.rows().to_vec())
}

/// Posterior mean transition matrix: each row of
/// [`posterior_hyperparameters`] divided by its sum.
///
/// # Errors
///
/// As [`posterior_hyperparameters`].
pub fn posterior_mean<S: AsRef<str>>(
    sequence: &[S],
    hyper: Option<&LabeledMatrix>,
) -> Result<LabeledMatrix, BayesError> {
    let post = posterior_hyperparameters(sequence, hyper)?;
    let values = post.values();
    let sums: Vec<f64> = values.row_iter().map(|r| r.sum()).collect();
    let n = post.n_states();
    let mean = DMatrix::from_fn(n, n, |i, j| values[(i, j)] / sums[i]);
    LabeledMatrix::with_states(mean, post.rows().to_vec())
}
