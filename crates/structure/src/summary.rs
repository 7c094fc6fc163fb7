//! Label-attached class listings for a chain.

use ergo_chain::MarkovChain;

use crate::classes::{Classification, CommClass, classify};
use crate::error::StructureError;

/// Closed, recurrent and transient classes of a chain, as state names.
///
/// In a finite chain the closed classes are exactly the recurrent ones; both
/// listings are kept so callers can report either name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSummary {
    closed_classes: Vec<Vec<String>>,
    recurrent_classes: Vec<Vec<String>>,
    transient_classes: Vec<Vec<String>>,
}

impl ChainSummary {
    /// Closed classes.
    pub fn closed_classes(&self) -> &[Vec<String>] {
        &self.closed_classes
    }

    /// Recurrent classes (identical to the closed classes).
    pub fn recurrent_classes(&self) -> &[Vec<String>] {
        &self.recurrent_classes
    }

    /// Transient classes.
    pub fn transient_classes(&self) -> &[Vec<String>] {
        &self.transient_classes
    }
}

/// Maps index-based classes to state names.
pub fn class_labels<'a>(
    classes: impl IntoIterator<Item = &'a CommClass>,
    states: &[String],
) -> Vec<Vec<String>> {
    classes
        .into_iter()
        .map(|c| c.states().iter().map(|&i| states[i].clone()).collect())
        .collect()
}

/// Summarises the class structure of `chain`.
///
/// # Errors
///
/// Returns [`StructureError`] if classification fails.
pub fn summarize(chain: &MarkovChain) -> Result<ChainSummary, StructureError> {
    let classification = classify(&chain.by_row_matrix())?;
    Ok(summary_from(&classification, chain.states()))
}

fn summary_from(classification: &Classification, states: &[String]) -> ChainSummary {
    let recurrent = class_labels(classification.recurrent_classes(), states);
    ChainSummary {
        closed_classes: recurrent.clone(),
        recurrent_classes: recurrent,
        transient_classes: class_labels(classification.transient_classes(), states),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergo_chain::Orientation;

    #[test]
    fn summary_of_absorbing_chain() {
        let mc = MarkovChain::from_rows(
            &[vec![1.0, 0.0, 0.0], vec![0.3, 0.4, 0.3], vec![0.0, 0.0, 1.0]],
            ["home", "road", "bar"],
            Orientation::ByRow,
        )
        .unwrap();
        let s = summarize(&mc).unwrap();
        assert_eq!(
            s.recurrent_classes(),
            &[vec!["home".to_string()], vec!["bar".to_string()]]
        );
        assert_eq!(s.closed_classes(), s.recurrent_classes());
        assert_eq!(s.transient_classes(), &[vec!["road".to_string()]]);
    }
}
