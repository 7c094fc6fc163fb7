//! Analyze command: structural and long-run analysis of one chain.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ergo_steady::{hitting_probabilities, steady_states};
use ergo_structure::{canonical_form, class_labels, classify, period, summarize};

use crate::cli::AnalyzeArgs;
use crate::output::{AnalyzeReport, LabeledRows, matrix_rows, write_json};
use crate::{config, convert};

/// Run the full analysis and write the report.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    // 1. Load config and build the chain
    let config = config::load(&args.common.config)?;
    let chain = convert::require_chain(&config)?;
    let steady_cfg = convert::build_steady_config(&config.steady)?;
    let states = chain.states();
    info!(n_states = chain.n_states(), "chain loaded");

    // 2. Structure
    let p = chain.by_row_matrix();
    let classification = classify(&p).context("classification failed")?;
    let summary = summarize(&chain).context("summary failed")?;
    let canonical = canonical_form(&chain).context("canonical form failed")?;
    let period = period(&p).context("period computation failed")?;
    let names = |idx: Vec<usize>| -> Vec<String> {
        idx.into_iter().map(|i| states[i].clone()).collect()
    };
    info!(
        n_classes = classification.classes().len(),
        irreducible = classification.is_irreducible(),
        period,
        "structure computed"
    );

    // 3. Long-run behaviour
    let steady = steady_states(&chain, &steady_cfg).context("steady-state solve failed")?;
    let hitting = hitting_probabilities(&chain).context("hitting-probability solve failed")?;
    info!("steady states and hitting probabilities computed");

    // 4. Report
    let report = AnalyzeReport {
        states: states.to_vec(),
        orientation: if chain.orientation().is_by_row() {
            "by_row"
        } else {
            "by_column"
        },
        communicating_classes: class_labels(classification.classes(), states),
        closed_classes: summary.closed_classes().to_vec(),
        recurrent_classes: summary.recurrent_classes().to_vec(),
        transient_classes: summary.transient_classes().to_vec(),
        recurrent_states: names(classification.recurrent_states()),
        transient_states: names(classification.transient_states()),
        absorbing_states: names(classification.absorbing_states()),
        irreducible: classification.is_irreducible(),
        period,
        canonical_form: LabeledRows {
            states: canonical.states().to_vec(),
            matrix: matrix_rows(canonical.matrix()),
        },
        steady_states: matrix_rows(&steady),
        hitting_probabilities: LabeledRows {
            states: states.to_vec(),
            matrix: matrix_rows(&hitting),
        },
    };
    write_json(&report, args.common.output.as_deref())
}
