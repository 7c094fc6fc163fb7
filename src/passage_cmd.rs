//! Passage command: first-passage time distribution from one state.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use ergo_temporal::{first_passage, first_passage_aggregate};

use crate::cli::PassageArgs;
use crate::output::{PassageReport, write_json};
use crate::{config, convert};

/// Run the first-passage computation and write the report.
pub fn run(args: PassageArgs) -> Result<()> {
    let _cmd = info_span!("passage").entered();
    // 1. Load config; CLI flags override [passage]
    let config = config::load(&args.common.config)?;
    let chain = convert::require_chain(&config)?;
    let section = config.passage.as_ref();

    let start = match (args.start, section) {
        (Some(s), _) => s,
        (None, Some(p)) => p.start.clone(),
        (None, None) => bail!("no start state: set [passage].start or use --start"),
    };
    let horizon = args.horizon.or(section.map(|p| p.horizon)).unwrap_or(10);
    let targets = section.and_then(|p| p.targets.clone());

    // 2. Resolve labels
    let start_idx = convert::state_index(&chain, &start)?;
    let p = chain.by_row_matrix();
    info!(start = %start, horizon, "computing first passage");

    // 3. Full rows or aggregate over targets
    let report = match targets {
        Some(targets) => {
            let idx = targets
                .iter()
                .map(|t| convert::state_index(&chain, t))
                .collect::<Result<Vec<_>>>()?;
            let agg = first_passage_aggregate(&p, start_idx, &idx, horizon)
                .context("first-passage aggregate failed")?;
            PassageReport {
                start,
                horizon,
                by_state: None,
                targets: Some(targets),
                aggregate: Some(agg.iter().copied().collect()),
            }
        }
        None => {
            let rows = first_passage(&p, start_idx, horizon).context("first passage failed")?;
            let by_state: Vec<BTreeMap<String, f64>> = rows
                .row_iter()
                .map(|r| chain.states().iter().cloned().zip(r.iter().copied()).collect())
                .collect();
            PassageReport {
                start,
                horizon,
                by_state: Some(by_state),
                targets: None,
                aggregate: None,
            }
        }
    };
    write_json(&report, args.common.output.as_deref())
}
