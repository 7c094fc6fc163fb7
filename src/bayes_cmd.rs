//! Bayes command: Dirichlet prior and predictive log-probabilities.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use ergo_bayes::{LabeledMatrix, posterior_mean, predictive_log_probability, prior_log_probability};

use crate::cli::BayesArgs;
use crate::output::{BayesReport, LabeledRows, matrix_rows, write_json};
use crate::{config, convert};

/// Run the Bayesian computations that the config supports.
///
/// The prior density needs `[chain]`; the predictive probability and the
/// posterior mean need `[bayes].prior_sequence`. When both run and the
/// hyperparameters name a different state set than the chain, only the
/// sequence results are reported.
pub fn run(args: BayesArgs) -> Result<()> {
    let _cmd = info_span!("bayes").entered();
    // 1. Load config
    let config = config::load(&args.common.config)?;
    let bayes = &config.bayes;
    let hyper = bayes
        .hyperparameters
        .as_ref()
        .map(convert::build_hyperparameters)
        .transpose()?;

    if config.chain.is_none() && bayes.prior_sequence.is_empty() {
        bail!("nothing to do: provide [chain] and/or [bayes].prior_sequence");
    }
    let mut report = BayesReport::default();

    // 2. Prior density of the configured chain
    if config.chain.is_some() {
        let chain = convert::require_chain(&config)?;
        let covers_chain = hyper
            .as_ref()
            .is_none_or(|h| same_states(h.rows(), chain.states()));
        if covers_chain || bayes.prior_sequence.is_empty() {
            let transition =
                LabeledMatrix::with_states(chain.by_row_matrix(), chain.states().to_vec())?;
            let lp = prior_log_probability(&transition, hyper.as_ref())
                .context("prior log-probability failed")?;
            info!(n_states = lp.len(), "prior log-probabilities computed");
            report.prior_log_probability = Some(lp.into_iter().collect());
        } else {
            warn!("hyperparameter states differ from [chain] states; skipping prior");
        }
    }

    // 3. Predictive probability and posterior mean from sequences
    if !bayes.prior_sequence.is_empty() {
        let lp = predictive_log_probability(
            &bayes.prior_sequence,
            &bayes.new_sequence,
            hyper.as_ref(),
        )
        .context("predictive log-probability failed")?;
        info!(log_probability = lp, "predictive log-probability computed");
        report.predictive_log_probability = Some(lp);

        let mean = posterior_mean(&bayes.prior_sequence, hyper.as_ref())
            .context("posterior mean failed")?;
        report.posterior_mean = Some(LabeledRows {
            states: mean.rows().to_vec(),
            matrix: matrix_rows(mean.values()),
        });
    }

    write_json(&report, args.common.output.as_deref())
}

fn same_states(a: &[String], b: &[String]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}
