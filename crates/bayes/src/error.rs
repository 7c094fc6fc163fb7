//! Error types for the ergo-bayes crate.

/// Error type for all fallible operations in the ergo-bayes crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BayesError {
    /// Returned when a matrix is not square.
    #[error("{what} matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Which matrix.
        what: &'static str,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when two sizes that must agree differ.
    #[error("{what}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// What was being compared.
        what: &'static str,
        /// Expected size.
        expected: usize,
        /// Actual size.
        found: usize,
    },

    /// Returned when a transition probability is outside `[0, 1]` or not finite.
    #[error("transition probability ({row}, {col}) = {value} is outside [0, 1]")]
    EntryOutOfRange {
        /// Row label.
        row: String,
        /// Column label.
        col: String,
        /// The offending value.
        value: f64,
    },

    /// Returned when a transition row does not sum to one.
    #[error("transition row {row} sums to {sum}, expected 1")]
    RowSumMismatch {
        /// Row label.
        row: String,
        /// Actual sum.
        sum: f64,
    },

    /// Returned when a label appears twice among the rows or the columns.
    #[error("duplicate state: {state}")]
    DuplicateState {
        /// The repeated label.
        state: String,
    },

    /// Returned when row and column labels, or the labels of two matrices,
    /// are not the same set.
    #[error("state label sets differ: {reason}")]
    LabelSetMismatch {
        /// Description of the mismatch.
        reason: String,
    },

    /// Returned when an observed state has no hyperparameters.
    #[error("no hyperparameters for observed state {state}")]
    MissingHyperparameters {
        /// The uncovered state.
        state: String,
    },

    /// Returned when a hyperparameter is below one or not a number.
    #[error("hyperparameter ({row}, {col}) = {value} must be at least 1")]
    HyperparameterBelowOne {
        /// Row label.
        row: String,
        /// Column label.
        col: String,
        /// The offending value.
        value: f64,
    },

    /// Returned when a sequence symbol is not in the state universe.
    #[error("unknown state: {state}")]
    UnknownState {
        /// The unrecognised label.
        state: String,
    },
}
