use ergo_chain::ensure_square;
use nalgebra::{DMatrix, DVector};

use crate::error::TemporalError;

pub(crate) fn check_state(index: usize, n_states: usize) -> Result<(), TemporalError> {
    if index >= n_states {
        return Err(TemporalError::StateOutOfRange { index, n_states });
    }
    Ok(())
}

pub(crate) fn check_start(p: &DMatrix<f64>, start: usize) -> Result<usize, TemporalError> {
    let n = ensure_square(p)?;
    check_state(start, n)?;
    Ok(n)
}

pub(crate) fn check_rewards(rewards: &DVector<f64>, n: usize) -> Result<(), TemporalError> {
    if rewards.len() != n {
        return Err(TemporalError::LengthMismatch {
            what: "rewards",
            expected: n,
            found: rewards.len(),
        });
    }
    match rewards.iter().position(|r| !r.is_finite()) {
        Some(state) => Err(TemporalError::NonFiniteReward { state }),
        None => Ok(()),
    }
}
