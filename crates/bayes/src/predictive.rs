//! Posterior predictive probability of new transitions.

use std::collections::BTreeSet;

use statrs::function::gamma::ln_gamma;
use tracing::debug;

use crate::counts::TransitionCounts;
use crate::error::BayesError;
use crate::hyper::resolve;
use crate::labeled::LabeledMatrix;

/// Log-probability of the transitions in `new` given those in `prior`,
/// under a Dirichlet-multinomial model of each state's outgoing row.
///
/// The state universe is every symbol of either sequence plus any state
/// that only the hyperparameters name. For counts `c` (prior data), `d`
/// (new data) and concentrations `α`, each row contributes
///
/// ```text
/// Σ_j [ln Γ(c_ij + d_ij + α_ij) - ln Γ(c_ij + α_ij)]
///     + ln Γ(Σ_j c_ij + α_ij) - ln Γ(Σ_j c_ij + d_ij + α_ij)
/// ```
///
/// The result does not depend on the order of the hyperparameter labels.
///
/// # Errors
///
/// Returns the hyperparameter errors of
/// [`validate_hyperparameters`](crate::validate_hyperparameters) and
/// [`BayesError::MissingHyperparameters`] if an observed state has none.
#[tracing::instrument(skip_all, fields(n_prior = prior.len(), n_new = new.len()))]
pub fn predictive_log_probability<S: AsRef<str>>(
    prior: &[S],
    new: &[S],
    hyper: Option<&LabeledMatrix>,
) -> Result<f64, BayesError> {
    let observed: BTreeSet<&str> = prior.iter().chain(new).map(AsRef::as_ref).collect();
    let alpha = resolve(&observed, hyper)?;
    let states = alpha.rows();

    let old = TransitionCounts::from_sequence(prior, states)?;
    let fresh = TransitionCounts::from_sequence(new, states)?;
    let (c, d, a) = (old.counts(), fresh.counts(), alpha.values());

    let mut total = 0.0;
    for i in 0..states.len() {
        let (mut c_sum, mut d_sum, mut a_sum) = (0.0, 0.0, 0.0);
        for j in 0..states.len() {
            c_sum += c[(i, j)];
            d_sum += d[(i, j)];
            a_sum += a[(i, j)];
            total += ln_gamma(c[(i, j)] + d[(i, j)] + a[(i, j)]) - ln_gamma(c[(i, j)] + a[(i, j)]);
        }
        total += ln_gamma(c_sum + a_sum) - ln_gamma(c_sum + d_sum + a_sum);
    }

    debug!(n_states = states.len(), "predictive log-probability computed");
    Ok(total)
}
