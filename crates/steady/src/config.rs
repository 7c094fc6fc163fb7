//! Numerical settings for the steady-state solver.

use crate::error::SteadyError;

/// Configuration for [`steady_states`](crate::steady_states).
///
/// Use the builder methods to customise tolerances.
///
/// # Example
///
/// ```
/// use ergo_steady::SteadyConfig;
///
/// let config = SteadyConfig::new()
///     .with_eigen_tolerance(1e-9)
///     .with_zero_sum_fallback(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SteadyConfig {
    eigen_tolerance: f64,
    symmetry_tolerance: f64,
    negative_tolerance: f64,
    zero_sum_fallback: bool,
}

impl SteadyConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `eigen_tolerance = 1e-7`, `symmetry_tolerance = 1e-12`,
    /// `negative_tolerance = 1e-12`, `zero_sum_fallback = true`.
    pub fn new() -> Self {
        Self {
            eigen_tolerance: 1e-7,
            symmetry_tolerance: 1e-12,
            negative_tolerance: 1e-12,
            zero_sum_fallback: true,
        }
    }

    /// Sets the per-component distance from `1 + 0i` within which an
    /// eigenvalue counts as one.
    pub fn with_eigen_tolerance(mut self, tol: f64) -> Self {
        self.eigen_tolerance = tol;
        self
    }

    /// Sets the largest `|a_ij - a_ji|` for which a sub-matrix is treated
    /// as symmetric.
    pub fn with_symmetry_tolerance(mut self, tol: f64) -> Self {
        self.symmetry_tolerance = tol;
        self
    }

    /// Sets how far below zero a normalised component may fall before the
    /// solver fails; components in `[-tol, 0)` are clamped to zero.
    pub fn with_negative_tolerance(mut self, tol: f64) -> Self {
        self.negative_tolerance = tol;
        self
    }

    /// Chooses what happens when an eigenvector sums to exactly zero:
    /// divide by one (`true`) or fail with
    /// [`SteadyError::ZeroMass`] (`false`).
    pub fn with_zero_sum_fallback(mut self, fallback: bool) -> Self {
        self.zero_sum_fallback = fallback;
        self
    }

    // --- Accessors ---

    /// Returns the eigenvalue-one tolerance.
    pub fn eigen_tolerance(&self) -> f64 {
        self.eigen_tolerance
    }

    /// Returns the symmetry tolerance.
    pub fn symmetry_tolerance(&self) -> f64 {
        self.symmetry_tolerance
    }

    /// Returns the negative-mass tolerance.
    pub fn negative_tolerance(&self) -> f64 {
        self.negative_tolerance
    }

    /// Returns the zero-sum policy.
    pub fn zero_sum_fallback(&self) -> bool {
        self.zero_sum_fallback
    }

    /// Validates this configuration.
    ///
    /// The eigenvalue tolerance must be finite and positive; the other
    /// tolerances finite and non-negative.
    pub fn validate(&self) -> Result<(), SteadyError> {
        if !self.eigen_tolerance.is_finite() || self.eigen_tolerance <= 0.0 {
            return Err(SteadyError::InvalidConfig {
                reason: format!(
                    "eigen_tolerance must be finite and positive, got {}",
                    self.eigen_tolerance
                ),
            });
        }
        for (name, v) in [
            ("symmetry_tolerance", self.symmetry_tolerance),
            ("negative_tolerance", self.negative_tolerance),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SteadyError::InvalidConfig {
                    reason: format!("{name} must be finite and non-negative, got {v}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for SteadyConfig {
    fn default() -> Self {
        Self::new()
    }
}
