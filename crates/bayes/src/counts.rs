//! Transition counts from observed sequences.

use std::collections::HashMap;

use nalgebra::DMatrix;

use crate::error::BayesError;

/// Counts of consecutive `(from, to)` pairs over a fixed state universe.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionCounts {
    states: Vec<String>,
    counts: DMatrix<f64>,
}

impl TransitionCounts {
    /// Counts the transitions of `sequence` over `states`.
    ///
    /// Sequences shorter than two symbols contribute no transitions.
    ///
    /// # Errors
    ///
    /// Returns [`BayesError::UnknownState`] if a symbol is not in `states`.
    pub fn from_sequence<S: AsRef<str>>(
        sequence: &[S],
        states: &[String],
    ) -> Result<Self, BayesError> {
        let index: HashMap<&str, usize> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();
        let lookup = |s: &S| {
            index
                .get(s.as_ref())
                .copied()
                .ok_or_else(|| BayesError::UnknownState {
                    state: s.as_ref().to_string(),
                })
        };

        let n = states.len();
        let mut counts = DMatrix::zeros(n, n);
        for pair in sequence.windows(2) {
            let from = lookup(&pair[0])?;
            let to = lookup(&pair[1])?;
            counts[(from, to)] += 1.0;
        }

        Ok(Self {
            states: states.to_vec(),
            counts,
        })
    }

    // --- Accessors ---

    /// Returns the state universe, in count-matrix order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Returns the count matrix (row = from, column = to).
    pub fn counts(&self) -> &DMatrix<f64> {
        &self.counts
    }

    /// Returns the number of counted transitions.
    pub fn total(&self) -> f64 {
        self.counts.sum()
    }
}
