//! Handler tests against a temp dir (no XDG paths touched).

use crate::cli::commands::{run_preview, run_reset_usage, run_usage, run_zip, ZipRequest};
use filefix_core::config::FilefixConfig;
use filefix_core::entitlement::ANONYMOUS_CALLER;
use filefix_core::usage::{self, QuotaConfig, UsageLedger};
use filefix_core::CasingStyle;
use std::path::{Path, PathBuf};

fn write_inputs(dir: &Path, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            std::fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

fn used_today(ledger_path: &Path, caller: &str) -> u32 {
    UsageLedger::load_from_path(ledger_path, &QuotaConfig::default())
        .unwrap()
        .stats(caller, usage::today())
        .used
}

#[tokio::test]
async fn zip_writes_archive_and_counts_usage() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_inputs(dir.path(), &[("My File.JPG", "jpeg"), ("a!.txt", "text")]);
    let output = dir.path().join("cleaned-files.zip");
    let ledger_path = dir.path().join("state").join("usage.json");

    let request = ZipRequest {
        paths: &paths,
        style: CasingStyle::Kebab,
        output: &output,
        user: None,
    };
    run_zip(&FilefixConfig::default(), &request, &ledger_path)
        .await
        .unwrap();

    let blob = std::fs::read(&output).unwrap();
    assert!(blob.starts_with(b"PK"));
    assert_eq!(used_today(&ledger_path, ANONYMOUS_CALLER), 2);
}

#[tokio::test]
async fn zip_over_quota_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_inputs(dir.path(), &[("a.txt", "1"), ("b.txt", "2")]);
    let output = dir.path().join("out.zip");
    let ledger_path = dir.path().join("usage.json");

    let mut cfg = FilefixConfig::default();
    cfg.quota.free_daily_limit = 1;
    let request = ZipRequest {
        paths: &paths,
        style: CasingStyle::Lowercase,
        output: &output,
        user: Some("free@example.com"),
    };
    let err = run_zip(&cfg, &request, &ledger_path).await.unwrap_err();
    assert!(err.to_string().contains("daily limit"));
    assert!(!output.exists());
    assert_eq!(used_today(&ledger_path, "free@example.com"), 0);
}

#[tokio::test]
async fn failed_write_gives_quota_back() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_inputs(dir.path(), &[("a.txt", "1"), ("b.txt", "2")]);
    let output = dir.path().join("missing-dir").join("out.zip");
    let ledger_path = dir.path().join("usage.json");

    let request = ZipRequest {
        paths: &paths,
        style: CasingStyle::Kebab,
        output: &output,
        user: Some("free@example.com"),
    };
    assert!(run_zip(&FilefixConfig::default(), &request, &ledger_path)
        .await
        .is_err());
    assert!(!output.exists());
    assert_eq!(used_today(&ledger_path, "free@example.com"), 0);
}

#[tokio::test]
async fn zip_for_pro_user_is_not_metered() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_inputs(dir.path(), &[("a.txt", "1"), ("b.txt", "2")]);
    let output = dir.path().join("out.zip");
    let ledger_path = dir.path().join("usage.json");

    let mut cfg = FilefixConfig::default();
    cfg.quota.free_daily_limit = 1;
    cfg.entitlements.pro_users = vec!["pro@example.com".to_string()];
    let request = ZipRequest {
        paths: &paths,
        style: CasingStyle::Pascal,
        output: &output,
        user: Some("PRO@example.com"),
    };
    run_zip(&cfg, &request, &ledger_path).await.unwrap();
    assert!(output.exists());
    assert!(!ledger_path.exists());
}

#[tokio::test]
async fn zip_rejects_oversized_batch() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_inputs(dir.path(), &[("a.txt", "1"), ("b.txt", "2"), ("c.txt", "3")]);
    let output = dir.path().join("out.zip");

    let mut cfg = FilefixConfig::default();
    cfg.max_files_per_batch = 2;
    let request = ZipRequest {
        paths: &paths,
        style: CasingStyle::Kebab,
        output: &output,
        user: None,
    };
    assert!(run_zip(&cfg, &request, &dir.path().join("usage.json")).await.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn usage_and_reset_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let ledger_path = dir.path().join("usage.json");
    let cfg = FilefixConfig::default();

    let ledger = UsageLedger::new(&cfg.quota);
    ledger.record_usage("me@example.com", 3, usage::today());
    ledger.save_to_path(&ledger_path).unwrap();

    run_usage(&cfg, Some("me@example.com"), &ledger_path).await.unwrap();
    run_reset_usage(&cfg, Some("me@example.com"), &ledger_path).await.unwrap();
    assert_eq!(used_today(&ledger_path, "me@example.com"), 0);
}

#[tokio::test]
async fn preview_never_fails() {
    let names = vec!["".to_string(), "!!!".to_string(), "a.txt".to_string(), "A.TXT".to_string()];
    for style in CasingStyle::ALL {
        run_preview(&names, style).await.unwrap();
    }
}
