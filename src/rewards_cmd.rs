//! Rewards command: finite-horizon expected rewards.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ergo_temporal::{expected_reward_before_hitting, expected_rewards};

use crate::cli::RewardsArgs;
use crate::output::{RewardsReport, write_json};
use crate::{config, convert};

/// Run the reward recurrences and write the report.
pub fn run(args: RewardsArgs) -> Result<()> {
    let _cmd = info_span!("rewards").entered();
    // 1. Load config
    let config = config::load(&args.common.config)?;
    let chain = convert::require_chain(&config)?;
    let section = config
        .rewards
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no rewards: add a [rewards] section to the config"))?;
    let horizon = args.horizon.unwrap_or(section.horizon);
    let rewards = convert::build_rewards(&section.values);
    let p = chain.by_row_matrix();
    info!(horizon, "computing expected rewards");

    // 2. Value recurrence from every state
    let values = expected_rewards(&p, horizon, &rewards).context("expected rewards failed")?;
    let expected_rewards = chain
        .states()
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect();

    // 3. Optional reward along the walk from one state
    let reward_before_hitting = match section.start.as_deref() {
        Some(start) => {
            let idx = convert::state_index(&chain, start)?;
            Some(
                expected_reward_before_hitting(&p, idx, &rewards, horizon)
                    .context("reward before hitting failed")?,
            )
        }
        None => None,
    };

    let report = RewardsReport {
        horizon,
        expected_rewards,
        start: section.start.clone(),
        reward_before_hitting,
    };
    write_json(&report, args.common.output.as_deref())
}
