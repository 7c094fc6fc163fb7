//! Period of an irreducible chain via BFS level labelling.
//!
//! Each newly discovered state is labelled one more than its discoverer.
//! An edge `i -> j` into an already labelled state closes a cycle whose
//! length is congruent to `label(i) + 1 - label(j)` modulo the period, so
//! the GCD of these differences is the period.

use std::collections::VecDeque;

use nalgebra::DMatrix;
use tracing::warn;

use crate::classes::classify;
use crate::error::StructureError;
use crate::reach::adjacency;

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while a != 0 {
        (a, b) = (b % a, a);
    }
    b
}

/// Period of an irreducible row-oriented chain, starting the BFS at state 0.
///
/// Returns 0 when the period is undefined: empty or reducible input.
///
/// # Errors
///
/// Returns [`StructureError::NotSquare`] for a non-square matrix.
pub fn period(matrix: &DMatrix<f64>) -> Result<usize, StructureError> {
    period_with_root(matrix, 0)
}

/// Same as [`period`] with an explicit BFS root.
///
/// # Errors
///
/// Returns [`StructureError::NotSquare`] for a non-square matrix and
/// [`StructureError::StateOutOfRange`] if `root` is not a state of a
/// non-empty chain.
#[tracing::instrument(skip(matrix), fields(n_states = matrix.nrows()))]
pub fn period_with_root(matrix: &DMatrix<f64>, root: usize) -> Result<usize, StructureError> {
    let classification = classify(matrix)?;
    let n = classification.n_states();
    if n == 0 {
        return Ok(0);
    }
    if root >= n {
        return Err(StructureError::StateOutOfRange {
            index: root,
            n_states: n,
        });
    }
    if !classification.is_irreducible() {
        warn!(
            n_classes = classification.classes().len(),
            "chain is not irreducible, period undefined"
        );
        return Ok(0);
    }

    let adj = adjacency(matrix);
    let mut label: Vec<Option<i64>> = vec![None; n];
    let mut frontier = VecDeque::from([root]);
    label[root] = Some(0);
    let mut d = 0_i64;

    while let Some(i) = frontier.pop_front() {
        if d == 1 {
            break;
        }
        let li = label[i].unwrap_or_default();
        for &j in &adj[i] {
            match label[j] {
                Some(lj) => d = gcd(d, li + 1 - lj),
                None => {
                    label[j] = Some(li + 1);
                    frontier.push_back(j);
                }
            }
        }
    }

    Ok(d as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> DMatrix<f64> {
        DMatrix::from_fn(n, n, |i, j| if j == (i + 1) % n { 1.0 } else { 0.0 })
    }

    #[test]
    fn gcd_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn flip_has_period_two() {
        let p = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(period(&p).unwrap(), 2);
    }

    #[test]
    fn pure_cycles() {
        for n in 1..=6 {
            assert_eq!(period(&cycle(n)).unwrap(), n, "cycle of length {n}");
        }
    }

    #[test]
    fn self_loop_makes_aperiodic() {
        let mut p = cycle(4);
        p[(0, 0)] = 0.5;
        p[(0, 1)] = 0.5;
        assert_eq!(period(&p).unwrap(), 1);
    }

    #[test]
    fn bipartite_walk_has_period_two() {
        // Reflecting random walk on 0..4.
        let p = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 1.0, 0.0, 0.0, //
                0.5, 0.0, 0.5, 0.0, //
                0.0, 0.5, 0.0, 0.5, //
                0.0, 0.0, 1.0, 0.0,
            ],
        );
        assert_eq!(period(&p).unwrap(), 2);
    }

    #[test]
    fn reducible_is_zero() {
        let p = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.5, 0.5]);
        assert_eq!(period(&p).unwrap(), 0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(period(&DMatrix::zeros(0, 0)).unwrap(), 0);
    }

    #[test]
    fn root_out_of_range() {
        assert!(matches!(
            period_with_root(&cycle(3), 3),
            Err(StructureError::StateOutOfRange {
                index: 3,
                n_states: 3
            })
        ));
    }

    #[test]
    fn root_does_not_change_period() {
        // Two cycles of lengths 3 and 6 sharing state 0: period 3.
        let mut p = DMatrix::zeros(7, 7);
        p[(0, 1)] = 0.5;
        p[(1, 2)] = 1.0;
        p[(2, 0)] = 1.0;
        p[(0, 3)] = 0.5;
        p[(3, 4)] = 1.0;
        p[(4, 5)] = 1.0;
        p[(5, 6)] = 1.0;
        p[(6, 0)] = 1.0;
        for root in 0..7 {
            assert_eq!(period_with_root(&p, root).unwrap(), 3, "root {root}");
        }
    }
}
