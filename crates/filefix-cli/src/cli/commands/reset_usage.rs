//! `filefix reset-usage` – forget a caller's usage record.

use anyhow::Result;
use filefix_core::config::FilefixConfig;
use filefix_core::entitlement::caller_key;
use filefix_core::usage::UsageLedger;
use std::path::Path;

pub async fn run_reset_usage(
    cfg: &FilefixConfig,
    user: Option<&str>,
    ledger_path: &Path,
) -> Result<()> {
    let caller = caller_key(user);
    let ledger = UsageLedger::load_from_path(ledger_path, &cfg.quota)?;
    ledger.reset(&caller);
    ledger.save_to_path(ledger_path)?;
    tracing::info!(caller = %caller, "usage reset");
    println!("Usage reset for {caller}.");
    Ok(())
}
