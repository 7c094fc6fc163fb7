//! Finite-horizon reward accumulation.

use nalgebra::{DMatrix, DVector};

use crate::error::TemporalError;
use crate::validate::{check_rewards, check_start};

/// Expected cumulative reward from every state over `horizon` steps.
///
/// Iterates `v ← r + P v` `horizon` times from `v = r`, so a zero horizon
/// returns the rewards themselves.
///
/// # Errors
///
/// Returns [`TemporalError::Chain`] for a non-square matrix and
/// [`TemporalError::LengthMismatch`] or [`TemporalError::NonFiniteReward`]
/// for a bad reward vector.
#[tracing::instrument(skip_all, fields(horizon = horizon))]
pub fn expected_rewards(
    p: &DMatrix<f64>,
    horizon: usize,
    rewards: &DVector<f64>,
) -> Result<DVector<f64>, TemporalError> {
    let n = ergo_chain::ensure_square(p)?;
    check_rewards(rewards, n)?;

    let mut v = rewards.clone();
    for _ in 0..horizon {
        v = rewards + p * &v;
    }
    Ok(v)
}

/// Expected reward collected from `start` over the first `horizon` steps,
/// `Σ_{t=0}^{horizon-1} e_start Pᵗ r`.
///
/// # Errors
///
/// As [`expected_rewards`], plus [`TemporalError::StateOutOfRange`] for a
/// bad start.
#[tracing::instrument(skip_all, fields(start = start, horizon = horizon))]
pub fn expected_reward_before_hitting(
    p: &DMatrix<f64>,
    start: usize,
    rewards: &DVector<f64>,
    horizon: usize,
) -> Result<f64, TemporalError> {
    let n = check_start(p, start)?;
    check_rewards(rewards, n)?;

    let mut dist = DVector::<f64>::zeros(n);
    dist[start] = 1.0;
    let pt = p.transpose();
    let mut total = 0.0;
    for _ in 0..horizon {
        total += dist.dot(rewards);
        dist = &pt * &dist;
    }
    Ok(total)
}
