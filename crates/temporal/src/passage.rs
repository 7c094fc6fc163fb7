//! First-passage time distributions.

use std::collections::BTreeSet;

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::TemporalError;
use crate::validate::{check_start, check_state};

/// First-passage probabilities from `start` over `horizon` steps.
///
/// Row `m - 1` of the result holds, for every state `j`, the probability
/// that the chain started at `start` visits `j` for the first time at step
/// `m` (for `j == start`, the first return). The running matrix starts at
/// `P` and is updated as `G ← P · (G with its diagonal zeroed)`.
///
/// # Errors
///
/// Returns [`TemporalError::Chain`] for a non-square matrix,
/// [`TemporalError::StateOutOfRange`] for a bad start and
/// [`TemporalError::InvalidHorizon`] if `horizon` is zero.
#[tracing::instrument(skip_all, fields(start = start, horizon = horizon))]
pub fn first_passage(
    p: &DMatrix<f64>,
    start: usize,
    horizon: usize,
) -> Result<DMatrix<f64>, TemporalError> {
    let n = check_start(p, start)?;
    if horizon == 0 {
        return Err(TemporalError::InvalidHorizon { horizon });
    }

    let mut out = DMatrix::zeros(horizon, n);
    let mut g = p.clone();
    out.row_mut(0).copy_from(&g.row(start));
    for m in 1..horizon {
        g.fill_diagonal(0.0);
        g = p * &g;
        out.row_mut(m).copy_from(&g.row(start));
    }

    debug!(n_states = n, "first-passage rows computed");
    Ok(out)
}

/// First-passage probabilities from `start`, summed over `targets`.
///
/// Entry `m - 1` is the sum over the distinct targets of the probability of
/// reaching that target for the first time at step `m`.
///
/// # Errors
///
/// As [`first_passage`], plus [`TemporalError::StateOutOfRange`] for a bad
/// target.
pub fn first_passage_aggregate(
    p: &DMatrix<f64>,
    start: usize,
    targets: &[usize],
    horizon: usize,
) -> Result<DVector<f64>, TemporalError> {
    let n = check_start(p, start)?;
    for &t in targets {
        check_state(t, n)?;
    }
    let targets: BTreeSet<usize> = targets.iter().copied().collect();
    let rows = first_passage(p, start, horizon)?;
    Ok(DVector::from_fn(horizon, |m, _| {
        targets.iter().map(|&t| rows[(m, t)]).sum()
    }))
}
