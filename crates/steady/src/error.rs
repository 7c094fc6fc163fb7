//! Error types for the ergo-steady crate.

/// Error type for all fallible operations in the ergo-steady crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SteadyError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the eigen-decomposition of a class sub-matrix fails.
    #[error("eigen-decomposition failed for the class containing state {first_state}")]
    EigenDecompositionFailed {
        /// Lowest state index of the class.
        first_state: usize,
    },

    /// Returned when a recurrent class does not have exactly one unit eigenvalue.
    #[error(
        "expected one unit eigenvalue for the class containing state {first_state}, found {found}"
    )]
    EigenvalueMultiplicity {
        /// Lowest state index of the class.
        first_state: usize,
        /// Number of eigenvalues within tolerance of one.
        found: usize,
    },

    /// Returned when a stationary component is negative beyond tolerance.
    #[error("negative stationary mass {value} at state {state}")]
    NegativeMass {
        /// State index.
        state: usize,
        /// The negative component.
        value: f64,
    },

    /// Returned when an eigenvector sums to zero and the fallback is disabled.
    #[error("stationary vector for the class containing state {first_state} sums to zero")]
    ZeroMass {
        /// Lowest state index of the class.
        first_state: usize,
    },

    /// Returned when the hitting-probability system for a target is singular.
    #[error("hitting-probability system for target state {target} is singular")]
    SingularSystem {
        /// Target state index.
        target: usize,
    },

    /// Structural analysis error.
    #[error(transparent)]
    Structure(#[from] ergo_structure::StructureError),
}
