//! Shape, domain and label checks shared by the analysis crates.

use std::collections::HashSet;

use nalgebra::DMatrix;

use crate::error::ChainError;

/// Row-sum tolerance used when constructing a [`MarkovChain`](crate::MarkovChain).
pub const STOCHASTIC_TOLERANCE: f64 = 1e-6;

/// Returns the order of `matrix`, or an error if it is not square.
pub fn ensure_square(matrix: &DMatrix<f64>) -> Result<usize, ChainError> {
    if matrix.nrows() != matrix.ncols() {
        return Err(ChainError::NotSquare {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    Ok(matrix.nrows())
}

/// Checks that no state name appears twice.
pub fn ensure_unique<S: AsRef<str>>(states: &[S]) -> Result<(), ChainError> {
    let mut seen = HashSet::with_capacity(states.len());
    for s in states {
        if !seen.insert(s.as_ref()) {
            return Err(ChainError::DuplicateState {
                state: s.as_ref().to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that `matrix` is square, has entries in `[0, 1]`, and that every
/// row sums to one within `tolerance`.
pub fn ensure_row_stochastic(matrix: &DMatrix<f64>, tolerance: f64) -> Result<(), ChainError> {
    ensure_square(matrix)?;
    for (i, row) in matrix.row_iter().enumerate() {
        let mut sum = 0.0;
        for (j, &p) in row.iter().enumerate() {
            if !p.is_finite() {
                return Err(ChainError::NonFinite { row: i, col: j });
            }
            if !(0.0..=1.0).contains(&p) {
                return Err(ChainError::EntryOutOfRange {
                    row: i,
                    col: j,
                    value: p,
                });
            }
            sum += p;
        }
        if (sum - 1.0).abs() > tolerance {
            return Err(ChainError::SumMismatch {
                axis: "row",
                index: i,
                sum,
            });
        }
    }
    Ok(())
}

/// Returns the first element of `required` that is absent from `available`.
///
/// The lookup set is built once from `available`, so the check is linear in
/// the combined length.
pub fn first_missing<'a, S, T>(required: &'a [S], available: &[T]) -> Option<&'a str>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let lookup: HashSet<&str> = available.iter().map(AsRef::as_ref).collect();
    required
        .iter()
        .map(AsRef::as_ref)
        .find(|s| !lookup.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_ok() {
        let m = DMatrix::<f64>::identity(3, 3);
        assert_eq!(ensure_square(&m).unwrap(), 3);
    }

    #[test]
    fn square_rejects_rectangular() {
        let m = DMatrix::<f64>::zeros(2, 3);
        assert!(matches!(
            ensure_square(&m),
            Err(ChainError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn unique_detects_duplicate() {
        let states = ["a", "b", "a"];
        assert!(matches!(
            ensure_unique(&states),
            Err(ChainError::DuplicateState { state }) if state == "a"
        ));
        assert!(ensure_unique(&["x", "y"]).is_ok());
    }

    #[test]
    fn stochastic_ok() {
        let m = DMatrix::from_row_slice(2, 2, &[0.3, 0.7, 1.0, 0.0]);
        assert!(ensure_row_stochastic(&m, 1e-10).is_ok());
    }

    #[test]
    fn stochastic_bad_sum() {
        let m = DMatrix::from_row_slice(2, 2, &[0.3, 0.6, 1.0, 0.0]);
        assert!(matches!(
            ensure_row_stochastic(&m, 1e-10),
            Err(ChainError::SumMismatch {
                axis: "row",
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn stochastic_negative_entry() {
        let m = DMatrix::from_row_slice(2, 2, &[1.5, -0.5, 0.0, 1.0]);
        assert!(matches!(
            ensure_row_stochastic(&m, 1e-10),
            Err(ChainError::EntryOutOfRange { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn stochastic_nan_entry() {
        let m = DMatrix::from_row_slice(1, 1, &[f64::NAN]);
        assert!(matches!(
            ensure_row_stochastic(&m, 1e-10),
            Err(ChainError::NonFinite { row: 0, col: 0 })
        ));
    }

    #[test]
    fn first_missing_finds_gap() {
        let required = ["a", "c", "d"];
        let available = ["d", "a", "b"];
        assert_eq!(first_missing(&required, &available), Some("c"));
        assert_eq!(first_missing(&["a"], &available), None);
        assert_eq!(first_missing::<&str, &str>(&[], &[]), None);
    }
}
