//! `filefix zip <paths..>` – clean names and write one archive.

use anyhow::{Context, Result};
use filefix_core::archive::{self, ArchiveOptions};
use filefix_core::batch::{FileBatch, RawFile};
use filefix_core::checksum;
use filefix_core::config::FilefixConfig;
use filefix_core::entitlement::{authorize, caller_key, GateDecision};
use filefix_core::usage::{self, UsageLedger};
use filefix_core::CasingStyle;
use std::path::{Path, PathBuf};

use super::preview::format_entry;

/// Inputs of one `zip` invocation.
#[derive(Debug)]
pub struct ZipRequest<'a> {
    pub paths: &'a [PathBuf],
    pub style: CasingStyle,
    pub output: &'a Path,
    pub user: Option<&'a str>,
}

/// Builds the archive and moves it into place at `output`.
async fn build_and_write(files: Vec<RawFile>, options: ArchiveOptions, output: &Path) -> Result<Vec<u8>> {
    let blob = archive::assemble_async(files, options, None)
        .await
        .context("error creating zip file, please try again")?;
    archive::write_archive(output, &blob)?;
    Ok(blob)
}

/// Runs one `zip` request end to end.
///
/// The usage ledger is loaded, reserved and saved without a file lock: one
/// `filefix` process per ledger at a time is assumed.
pub async fn run_zip(cfg: &FilefixConfig, request: &ZipRequest<'_>, ledger_path: &Path) -> Result<()> {
    let files = request
        .paths
        .iter()
        .map(|p| RawFile::read(p))
        .collect::<Result<Vec<_>>>()?;
    let offered = files.len();

    let mut batch = FileBatch::new(cfg.max_files_per_batch);
    let added = batch.add(files)?;
    if added < offered {
        println!("Skipped {} duplicate file(s).", offered - added);
    }

    let caller = caller_key(request.user);
    let entitlement = cfg.entitlements.resolve(request.user);
    let count = u32::try_from(batch.len()).context("too many files")?;
    let today = usage::today();

    let ledger = UsageLedger::load_from_path(ledger_path, &cfg.quota)?;
    let decision = authorize(entitlement, &ledger, &caller, count, today)?;
    if let GateDecision::Metered(_) = decision {
        ledger.save_to_path(ledger_path)?;
    }

    let options = ArchiveOptions::new(request.style).with_compression(cfg.compression);
    let plan = archive::plan_entries(batch.files(), request.style);
    let blob = match build_and_write(batch.into_files(), options, request.output).await {
        Ok(blob) => blob,
        Err(e) => {
            if let GateDecision::Metered(_) = decision {
                ledger.release(&caller, count, today);
                ledger.save_to_path(ledger_path)?;
            }
            return Err(e);
        }
    };

    for entry in &plan {
        println!("{}", format_entry(entry));
    }
    println!(
        "Wrote {} ({} files, {} bytes)",
        request.output.display(),
        plan.len(),
        blob.len()
    );
    println!("sha256 {}", checksum::sha256_bytes(&blob));
    if let GateDecision::Metered(record) = decision {
        if record.limit_reached {
            println!("Daily free limit reached ({} files).", ledger.limit());
        } else {
            println!("{} of {} free files left today.", record.remaining, ledger.limit());
        }
    }
    Ok(())
}
