//! Reachability closure of the transition graph.
//!
//! State `j` is a successor of `i` iff `P(i, j) > 0`, tested exactly as
//! given. Every state reaches itself through the zero-length path.

use nalgebra::DMatrix;

use crate::error::StructureError;

/// n×n boolean reachability relation, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    n: usize,
    cells: Vec<bool>,
}

impl Reachability {
    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.n
    }

    /// Whether `to` is reachable from `from`, or `None` if either index is
    /// not a state.
    pub fn reaches(&self, from: usize, to: usize) -> Option<bool> {
        (from < self.n && to < self.n).then(|| self.cells[from * self.n + to])
    }

    /// Iterates over every state reachable from `from`, in index order.
    ///
    /// Yields nothing if `from` is not a state.
    pub fn reachable_from(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        let row: &[bool] = if from < self.n {
            &self.cells[from * self.n..(from + 1) * self.n]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(j, &r)| r.then_some(j))
    }

    /// Number of states reachable from `from`, including `from` itself.
    pub fn count_from(&self, from: usize) -> usize {
        self.reachable_from(from).count()
    }
}

/// Successor lists of the transition graph.
pub(crate) fn adjacency(matrix: &DMatrix<f64>) -> Vec<Vec<usize>> {
    let n = matrix.nrows();
    (0..n)
        .map(|i| (0..n).filter(|&j| matrix[(i, j)] > 0.0).collect())
        .collect()
}

pub(crate) fn check_square(matrix: &DMatrix<f64>) -> Result<usize, StructureError> {
    if matrix.nrows() != matrix.ncols() {
        return Err(StructureError::NotSquare {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    Ok(matrix.nrows())
}

/// Builds the reachability closure of a row-oriented transition matrix.
///
/// Runs one stack-based depth-first traversal per state, O(n³) worst case.
///
/// # Errors
///
/// Returns [`StructureError::NotSquare`] for a non-square matrix.
pub fn reachability(matrix: &DMatrix<f64>) -> Result<Reachability, StructureError> {
    let n = check_square(matrix)?;
    let adj = adjacency(matrix);
    let mut cells = vec![false; n * n];

    for i in 0..n {
        let row = &mut cells[i * n..(i + 1) * n];
        let mut stack = vec![i];
        row[i] = true;
        while let Some(j) = stack.pop() {
            for &k in &adj[j] {
                if !row[k] {
                    row[k] = true;
                    stack.push(k);
                }
            }
        }
    }

    Ok(Reachability { n, cells })
}
