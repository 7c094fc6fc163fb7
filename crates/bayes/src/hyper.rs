//! Hyperparameter validation and alignment with the observed states.

use std::collections::BTreeSet;

use ergo_chain::first_missing;

use crate::error::BayesError;
use crate::labeled::LabeledMatrix;

/// Checks a Dirichlet hyperparameter matrix: consistent labels and every
/// entry at least one.
///
/// # Errors
///
/// Returns the label errors of [`LabeledMatrix::check_label_sets`] or
/// [`BayesError::HyperparameterBelowOne`]; non-finite entries are rejected too.
pub fn validate_hyperparameters(hyper: &LabeledMatrix) -> Result<(), BayesError> {
    hyper.check_label_sets()?;
    let values = hyper.values();
    for (i, row) in hyper.rows().iter().enumerate() {
        for (j, col) in hyper.cols().iter().enumerate() {
            let value = values[(i, j)];
            if !value.is_finite() || value < 1.0 {
                return Err(BayesError::HyperparameterBelowOne {
                    row: row.clone(),
                    col: col.clone(),
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Sorted hyperparameters covering `observed`.
///
/// Without a user matrix this is the all-ones matrix over the observed
/// states. A user matrix may name extra states; they join the universe.
pub(crate) fn resolve(
    observed: &BTreeSet<&str>,
    hyper: Option<&LabeledMatrix>,
) -> Result<LabeledMatrix, BayesError> {
    let Some(hyper) = hyper else {
        return Ok(LabeledMatrix::ones(
            observed.iter().map(|s| s.to_string()).collect(),
        ));
    };

    validate_hyperparameters(hyper)?;
    let required: Vec<&str> = observed.iter().copied().collect();
    if let Some(state) = first_missing(&required, hyper.rows()) {
        return Err(BayesError::MissingHyperparameters {
            state: state.to_string(),
        });
    }
    Ok(hyper.sorted())
}
