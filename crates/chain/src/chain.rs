//! The chain value object: a transition matrix, its state names, and the
//! orientation the matrix is stored in.

use nalgebra::DMatrix;

use crate::error::ChainError;
use crate::validate::{STOCHASTIC_TOLERANCE, ensure_unique};

/// Whether probabilities leaving a state are stored along rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Row `i` holds the transition probabilities out of state `i`.
    #[default]
    ByRow,
    /// Column `j` holds the transition probabilities out of state `j`.
    ByColumn,
}

impl Orientation {
    /// Returns `true` for [`Orientation::ByRow`].
    pub fn is_by_row(self) -> bool {
        matches!(self, Self::ByRow)
    }
}

/// A validated finite-state, discrete-time Markov chain.
///
/// The matrix is kept in the caller's orientation. Analyses work on the
/// row-stochastic form returned by [`by_row_matrix`](Self::by_row_matrix)
/// and map n×n results back with
/// [`restore_orientation`](Self::restore_orientation).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovChain {
    matrix: DMatrix<f64>,
    states: Vec<String>,
    orientation: Orientation,
}

impl MarkovChain {
    /// Builds a chain, validating shape, labels and stochasticity.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] if the matrix is empty or not square, the
    /// number of states differs from the order, a state is repeated, an
    /// entry is non-finite or outside `[0, 1]`, or a row (column for
    /// [`Orientation::ByColumn`]) does not sum to one.
    pub fn new(
        matrix: DMatrix<f64>,
        states: Vec<String>,
        orientation: Orientation,
    ) -> Result<Self, ChainError> {
        let n = matrix.nrows();
        if n == 0 && matrix.ncols() == 0 {
            return Err(ChainError::EmptyMatrix);
        }
        if n != matrix.ncols() {
            return Err(ChainError::NotSquare {
                rows: n,
                cols: matrix.ncols(),
            });
        }
        if states.len() != n {
            return Err(ChainError::StateCountMismatch {
                states: states.len(),
                order: n,
            });
        }
        ensure_unique(&states)?;

        for i in 0..n {
            for j in 0..n {
                let p = matrix[(i, j)];
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
            }
        }

        let (axis, sums): (&'static str, Vec<f64>) = match orientation {
            Orientation::ByRow => ("row", matrix.row_iter().map(|r| r.sum()).collect()),
            Orientation::ByColumn => ("column", matrix.column_iter().map(|c| c.sum()).collect()),
        };
        if let Some((index, &sum)) = sums
            .iter()
            .enumerate()
            .find(|(_, s)| (**s - 1.0).abs() > STOCHASTIC_TOLERANCE)
        {
            return Err(ChainError::SumMismatch { axis, index, sum });
        }

        Ok(Self {
            matrix,
            states,
            orientation,
        })
    }

    /// Builds a chain from nested rows of the matrix as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotSquare`] if any row length differs from the
    /// number of rows, otherwise the same errors as [`MarkovChain::new`].
    pub fn from_rows<S: Into<String>>(
        rows: &[Vec<f64>],
        states: impl IntoIterator<Item = S>,
        orientation: Orientation,
    ) -> Result<Self, ChainError> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(ChainError::NotSquare {
                rows: n,
                cols: bad.len(),
            });
        }
        let matrix = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Self::new(
            matrix,
            states.into_iter().map(Into::into).collect(),
            orientation,
        )
    }

    /// Returns the matrix in its stored orientation.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Returns the state names.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Returns the stored orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the position of `state` in the state list.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownState`] if the name is not present.
    pub fn state_index(&self, state: &str) -> Result<usize, ChainError> {
        self.states
            .iter()
            .position(|s| s == state)
            .ok_or_else(|| ChainError::UnknownState {
                state: state.to_string(),
            })
    }

    /// Returns a row-stochastic copy of the transition matrix.
    pub fn by_row_matrix(&self) -> DMatrix<f64> {
        match self.orientation {
            Orientation::ByRow => self.matrix.clone(),
            Orientation::ByColumn => self.matrix.transpose(),
        }
    }

    /// Maps a row-oriented result back to this chain's orientation.
    pub fn restore_orientation(&self, result: DMatrix<f64>) -> DMatrix<f64> {
        match self.orientation {
            Orientation::ByRow => result,
            Orientation::ByColumn => result.transpose(),
        }
    }

    /// Builds a chain with this chain's orientation from a row-stochastic
    /// matrix, e.g. after reordering states.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`MarkovChain::new`].
    pub fn with_by_row_matrix(
        &self,
        by_row: DMatrix<f64>,
        states: Vec<String>,
    ) -> Result<Self, ChainError> {
        let matrix = match self.orientation {
            Orientation::ByRow => by_row,
            Orientation::ByColumn => by_row.transpose(),
        };
        Self::new(matrix, states, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn flip() -> MarkovChain {
        MarkovChain::from_rows(
            &[vec![0.0, 1.0], vec![1.0, 0.0]],
            ["a", "b"],
            Orientation::ByRow,
        )
        .unwrap()
    }

    #[test]
    fn accessors() {
        let mc = flip();
        assert_eq!(mc.n_states(), 2);
        assert_eq!(mc.states(), &["a".to_string(), "b".to_string()]);
        assert_eq!(mc.orientation(), Orientation::ByRow);
        assert_eq!(mc.state_index("b").unwrap(), 1);
    }

    #[test]
    fn unknown_state() {
        assert!(matches!(
            flip().state_index("z"),
            Err(ChainError::UnknownState { state }) if state == "z"
        ));
    }

    #[test]
    fn rejects_empty() {
        let result = MarkovChain::new(DMatrix::zeros(0, 0), vec![], Orientation::ByRow);
        assert!(matches!(result, Err(ChainError::EmptyMatrix)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result =
            MarkovChain::from_rows(&[vec![1.0], vec![0.5, 0.5]], ["a", "b"], Orientation::ByRow);
        assert!(matches!(result, Err(ChainError::NotSquare { .. })));
    }

    #[test]
    fn rejects_state_count_mismatch() {
        let result = MarkovChain::from_rows(&[vec![1.0]], ["a", "b"], Orientation::ByRow);
        assert!(matches!(
            result,
            Err(ChainError::StateCountMismatch {
                states: 2,
                order: 1
            })
        ));
    }

    #[test]
    fn rejects_duplicate_states() {
        let result = MarkovChain::from_rows(
            &[vec![0.5, 0.5], vec![0.5, 0.5]],
            ["a", "a"],
            Orientation::ByRow,
        );
        assert!(matches!(result, Err(ChainError::DuplicateState { .. })));
    }

    #[test]
    fn column_orientation_checks_columns() {
        // Column-stochastic but not row-stochastic.
        let rows = [vec![0.2, 1.0], vec![0.8, 0.0]];
        assert!(MarkovChain::from_rows(&rows, ["a", "b"], Orientation::ByColumn).is_ok());
        assert!(matches!(
            MarkovChain::from_rows(&rows, ["a", "b"], Orientation::ByRow),
            Err(ChainError::SumMismatch { axis: "row", .. })
        ));
    }

    #[test]
    fn by_row_matrix_transposes_columns() {
        let rows = [vec![0.2, 1.0], vec![0.8, 0.0]];
        let mc = MarkovChain::from_rows(&rows, ["a", "b"], Orientation::ByColumn).unwrap();
        let p = mc.by_row_matrix();
        assert_abs_diff_eq!(p[(0, 1)], 0.8);
        assert_abs_diff_eq!(p[(1, 0)], 1.0);
        let back = mc.restore_orientation(p);
        assert_eq!(&back, mc.matrix());
    }

    #[test]
    fn with_by_row_matrix_keeps_orientation() {
        let rows = [vec![0.2, 1.0], vec![0.8, 0.0]];
        let mc = MarkovChain::from_rows(&rows, ["a", "b"], Orientation::ByColumn).unwrap();
        let rebuilt = mc
            .with_by_row_matrix(mc.by_row_matrix(), mc.states().to_vec())
            .unwrap();
        assert_eq!(rebuilt, mc);
    }
}
