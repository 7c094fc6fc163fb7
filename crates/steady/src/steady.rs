//! Stationary distributions, one per recurrent class.

use std::cmp::Ordering;

use ergo_chain::MarkovChain;
use ergo_structure::{CommClass, classify};
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use tracing::debug;

use crate::config::SteadyConfig;
use crate::eigen::unit_left_eigenvectors;
use crate::error::SteadyError;

/// Stationary distributions of a chain, in its own orientation.
///
/// For a row-oriented chain the result has one row per recurrent class;
/// for a column-oriented chain, one column per class.
///
/// # Errors
///
/// See [`steady_states_by_row`].
pub fn steady_states(
    chain: &MarkovChain,
    config: &SteadyConfig,
) -> Result<DMatrix<f64>, SteadyError> {
    let result = steady_states_by_row(&chain.by_row_matrix(), config)?;
    Ok(chain.restore_orientation(result))
}

/// Stationary distributions of a row-stochastic matrix.
///
/// Each row is supported on exactly one recurrent class, sums to one, and
/// rows are sorted lexicographically by their entries.
///
/// # Errors
///
/// Returns [`SteadyError::InvalidConfig`] for a bad configuration,
/// [`SteadyError::Structure`] for a non-square matrix, and the numerical
/// failures of the per-class solve: [`SteadyError::EigenDecompositionFailed`],
/// [`SteadyError::EigenvalueMultiplicity`], [`SteadyError::ZeroMass`] and
/// [`SteadyError::NegativeMass`].
#[tracing::instrument(skip_all, fields(n_states = p.nrows()))]
pub fn steady_states_by_row(
    p: &DMatrix<f64>,
    config: &SteadyConfig,
) -> Result<DMatrix<f64>, SteadyError> {
    config.validate()?;
    let classification = classify(p)?;
    let n = classification.n_states();
    let recurrent: Vec<&CommClass> = classification.recurrent_classes().collect();

    let mut rows: Vec<Vec<f64>> = recurrent
        .par_iter()
        .map(|class| class_steady_state(p, class.states(), config))
        .map(|local| {
            local.map(|(states, pi)| {
                let mut full = vec![0.0; n];
                for (k, &s) in states.iter().enumerate() {
                    full[s] = pi[k];
                }
                full
            })
        })
        .collect::<Result<_, _>>()?;

    rows.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    debug!(n_classes = rows.len(), "steady states computed");

    Ok(DMatrix::from_fn(rows.len(), n, |i, j| rows[i][j]))
}

/// Solves one recurrent class; returns its member indices with the
/// normalised stationary vector over them.
fn class_steady_state<'a>(
    p: &DMatrix<f64>,
    states: &'a [usize],
    config: &SteadyConfig,
) -> Result<(&'a [usize], DVector<f64>), SteadyError> {
    let first_state = states[0];
    let k = states.len();
    let sub = DMatrix::from_fn(k, k, |a, b| p[(states[a], states[b])]);

    let vectors = unit_left_eigenvectors(
        &sub,
        config.eigen_tolerance(),
        config.symmetry_tolerance(),
    )
    .ok_or(SteadyError::EigenDecompositionFailed { first_state })?;

    let mut pi = match <[DVector<f64>; 1]>::try_from(vectors) {
        Ok([pi]) => pi,
        Err(vectors) => {
            return Err(SteadyError::EigenvalueMultiplicity {
                first_state,
                found: vectors.len(),
            });
        }
    };

    let sum = pi.sum();
    let divisor = if sum != 0.0 {
        sum
    } else if config.zero_sum_fallback() {
        1.0
    } else {
        return Err(SteadyError::ZeroMass { first_state });
    };
    pi /= divisor;

    for (a, v) in pi.iter_mut().enumerate() {
        if *v < -config.negative_tolerance() {
            return Err(SteadyError::NegativeMass {
                state: states[a],
                value: *v,
            });
        }
        if *v < 0.0 {
            *v = 0.0;
        }
    }

    debug!(first_state, size = k, "class stationary vector");
    Ok((states, pi))
}
