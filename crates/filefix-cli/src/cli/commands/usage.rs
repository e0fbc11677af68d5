//! `filefix usage` – today's usage against the free quota.

use anyhow::Result;
use filefix_core::config::FilefixConfig;
use filefix_core::entitlement::caller_key;
use filefix_core::usage::{self, UsageLedger};
use std::path::Path;

pub async fn run_usage(cfg: &FilefixConfig, user: Option<&str>, ledger_path: &Path) -> Result<()> {
    let entitlement = cfg.entitlements.resolve(user);
    if entitlement.is_privileged() {
        println!("Plan: {} (no daily limit)", entitlement.tier.as_str());
        return Ok(());
    }

    let ledger = UsageLedger::load_from_path(ledger_path, &cfg.quota)?;
    let stats = ledger.stats(&caller_key(user), usage::today());
    println!(
        "Plan: free. Used {} of {} files today ({}%), {} remaining.",
        stats.used, stats.limit, stats.percentage, stats.remaining
    );
    Ok(())
}
