//! Error types for the ergo-structure crate.

/// Error type for all fallible operations in the ergo-structure crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StructureError {
    /// Returned when the transition matrix is not square.
    #[error("transition matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when a state index is not below the number of states.
    #[error("state index {index} out of range for {n_states} states")]
    StateOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of states in the chain.
        n_states: usize,
    },

    /// Chain construction error.
    #[error(transparent)]
    Chain(#[from] ergo_chain::ChainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_square() {
        let e = StructureError::NotSquare { rows: 3, cols: 2 };
        assert_eq!(
            e.to_string(),
            "transition matrix is not square: 3 rows, 2 columns"
        );
    }

    #[test]
    fn display_state_out_of_range() {
        let e = StructureError::StateOutOfRange {
            index: 4,
            n_states: 3,
        };
        assert_eq!(e.to_string(), "state index 4 out of range for 3 states");
    }

    #[test]
    fn from_chain_error() {
        let ce = ergo_chain::ChainError::EmptyMatrix;
        let se: StructureError = ce.into();
        assert!(matches!(se, StructureError::Chain(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StructureError>();
    }
}
