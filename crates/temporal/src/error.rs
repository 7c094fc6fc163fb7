//! Error types for the ergo-temporal crate.

/// Error type for all fallible operations in the ergo-temporal crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TemporalError {
    /// Returned when a state index is not below the number of states.
    #[error("state index {index} out of range for {n_states} states")]
    StateOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of states in the chain.
        n_states: usize,
    },

    /// Returned when a per-state vector does not have one entry per state.
    #[error("{what} has length {found}, expected {expected}")]
    LengthMismatch {
        /// Which input was wrong.
        what: &'static str,
        /// Number of states.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// Returned when a horizon of zero steps is given where at least one is needed.
    #[error("horizon must be at least 1, got {horizon}")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: usize,
    },

    /// Returned when a reward is NaN or infinite.
    #[error("reward for state {state} is not finite")]
    NonFiniteReward {
        /// State index.
        state: usize,
    },

    /// Shape error from the shared validators.
    #[error(transparent)]
    Chain(#[from] ergo_chain::ChainError),
}
