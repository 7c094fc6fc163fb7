//! Square matrices with named rows and columns.

use ergo_chain::{ChainError, ensure_unique};
use nalgebra::DMatrix;

use crate::error::BayesError;

/// A square matrix whose rows and columns carry state labels.
///
/// Row and column labels may be listed in different orders; the analyses
/// align them with [`sorted`](Self::sorted) after
/// [`check_label_sets`](Self::check_label_sets) has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    rows: Vec<String>,
    cols: Vec<String>,
    values: DMatrix<f64>,
}

impl LabeledMatrix {
    /// Builds a labelled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`BayesError::NotSquare`] for a non-square matrix and
    /// [`BayesError::DimensionMismatch`] if a label list does not match the
    /// order.
    pub fn new(
        values: DMatrix<f64>,
        rows: Vec<String>,
        cols: Vec<String>,
    ) -> Result<Self, BayesError> {
        if values.nrows() != values.ncols() {
            return Err(BayesError::NotSquare {
                what: "labelled",
                rows: values.nrows(),
                cols: values.ncols(),
            });
        }
        for (what, labels) in [("row labels", &rows), ("column labels", &cols)] {
            if labels.len() != values.nrows() {
                return Err(BayesError::DimensionMismatch {
                    what,
                    expected: values.nrows(),
                    found: labels.len(),
                });
            }
        }
        Ok(Self { rows, cols, values })
    }

    /// Builds a labelled matrix with the same labels on both axes.
    ///
    /// # Errors
    ///
    /// As [`LabeledMatrix::new`].
    pub fn with_states(values: DMatrix<f64>, states: Vec<String>) -> Result<Self, BayesError> {
        Self::new(values, states.clone(), states)
    }

    /// The all-ones (uniform Dirichlet) hyperparameter matrix over `states`.
    pub fn ones(states: Vec<String>) -> Self {
        let n = states.len();
        Self {
            rows: states.clone(),
            cols: states,
            values: DMatrix::from_element(n, n, 1.0),
        }
    }

    // --- Accessors ---

    /// Returns the row labels.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Returns the column labels.
    pub fn cols(&self) -> &[String] {
        &self.cols
    }

    /// Returns the matrix entries.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.rows.len()
    }

    /// Looks up an entry by labels.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.rows.iter().position(|s| s == row)?;
        let j = self.cols.iter().position(|s| s == col)?;
        Some(self.values[(i, j)])
    }

    /// Checks that row labels and column labels are each unique and form
    /// the same set.
    ///
    /// # Errors
    ///
    /// Returns [`BayesError::DuplicateState`] or
    /// [`BayesError::LabelSetMismatch`].
    pub fn check_label_sets(&self) -> Result<(), BayesError> {
        unique(&self.rows)?;
        unique(&self.cols)?;
        if sorted_labels(&self.rows) != sorted_labels(&self.cols) {
            return Err(BayesError::LabelSetMismatch {
                reason: "row and column labels differ".to_string(),
            });
        }
        Ok(())
    }

    /// Returns a copy with rows and columns permuted into sorted label order.
    pub fn sorted(&self) -> Self {
        let row_order = argsort(&self.rows);
        let col_order = argsort(&self.cols);
        let n = self.values.nrows();
        Self {
            rows: row_order.iter().map(|&i| self.rows[i].clone()).collect(),
            cols: col_order.iter().map(|&j| self.cols[j].clone()).collect(),
            values: DMatrix::from_fn(n, n, |a, b| self.values[(row_order[a], col_order[b])]),
        }
    }
}

pub(crate) fn sorted_labels(labels: &[String]) -> Vec<&str> {
    let mut v: Vec<&str> = labels.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}

fn argsort(labels: &[String]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| labels[a].cmp(&labels[b]));
    order
}

fn unique(labels: &[String]) -> Result<(), BayesError> {
    ensure_unique(labels).map_err(|e| match e {
        ChainError::DuplicateState { state } => BayesError::DuplicateState { state },
        other => BayesError::LabelSetMismatch {
            reason: other.to_string(),
        },
    })
}
