//! Error types for the ergo-chain crate.

/// Error type for all fallible operations in the ergo-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when a chain has no states.
    #[error("transition matrix is empty")]
    EmptyMatrix,

    /// Returned when the transition matrix is not square.
    #[error("transition matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when the number of state names differs from the matrix order.
    #[error("got {states} state names for a matrix of order {order}")]
    StateCountMismatch {
        /// Number of state names supplied.
        states: usize,
        /// Order of the transition matrix.
        order: usize,
    },

    /// Returned when a state name appears more than once.
    #[error("duplicate state: {state:?}")]
    DuplicateState {
        /// The repeated state name.
        state: String,
    },

    /// Returned when a state name is not part of the chain.
    #[error("unknown state: {state:?}")]
    UnknownState {
        /// The state name that was looked up.
        state: String,
    },

    /// Returned when a matrix entry is NaN or infinite.
    #[error("entry ({row}, {col}) is not finite")]
    NonFinite {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },

    /// Returned when a matrix entry lies outside `[0, 1]`.
    #[error("entry ({row}, {col}) = {value} is outside [0, 1]")]
    EntryOutOfRange {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a row (or column) does not sum to one.
    #[error("{axis} {index} sums to {sum}, expected 1")]
    SumMismatch {
        /// `"row"` or `"column"`.
        axis: &'static str,
        /// Index of the row or column.
        index: usize,
        /// Actual sum.
        sum: f64,
    },
}
