//! Daily usage ledger for the free tier.
//!
//! Counts files processed per caller per local day against a fixed limit.
//! All reads and updates go through one mutex so concurrent requests from the
//! same caller cannot double count. The ledger can be persisted as JSON under
//! the XDG state dir so the count survives between CLI runs.
//!
//! The mutex only covers one process. The JSON file is read and rewritten
//! without a file lock, so one process per ledger file at a time is assumed.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Quota settings (`[quota]` section of config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaConfig {
    /// Files a free caller may process per day.
    pub free_daily_limit: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self { free_daily_limit: 8 }
    }
}

/// Answer to "may this caller process `requested` more files today?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub used: u32,
    pub limit: u32,
}

/// Ledger state after recording usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageRecord {
    pub used: u32,
    pub remaining: u32,
    pub limit_reached: bool,
}

/// Display-oriented summary for one caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageStats {
    pub used: u32,
    pub limit: u32,
    pub remaining: u32,
    /// `used / limit` as a rounded percentage; may exceed 100.
    pub percentage: u32,
}

/// A free caller asked for more files than remain in today's quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("daily limit reached: requested {requested} files, {remaining} of {limit} remaining")]
pub struct QuotaExceeded {
    pub requested: u32,
    pub remaining: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct DailyUsage {
    date: NaiveDate,
    count: u32,
}

/// On-disk form of the ledger.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedLedger {
    #[serde(default)]
    callers: BTreeMap<String, DailyUsage>,
}

/// Today's date in local time; the day boundary for quotas.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug)]
pub struct UsageLedger {
    limit: u32,
    callers: Mutex<BTreeMap<String, DailyUsage>>,
}

impl UsageLedger {
    pub fn new(config: &QuotaConfig) -> Self {
        Self {
            limit: config.free_daily_limit,
            callers: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, DailyUsage>> {
        self.callers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn used_today(callers: &BTreeMap<String, DailyUsage>, caller: &str, today: NaiveDate) -> u32 {
        callers
            .get(caller)
            .filter(|u| u.date == today)
            .map_or(0, |u| u.count)
    }

    fn decide(&self, used: u32, requested: u32) -> QuotaDecision {
        QuotaDecision {
            allowed: used.saturating_add(requested) <= self.limit,
            remaining: self.limit.saturating_sub(used),
            used,
            limit: self.limit,
        }
    }

    fn add(
        &self,
        callers: &mut BTreeMap<String, DailyUsage>,
        caller: &str,
        count: u32,
        today: NaiveDate,
    ) -> UsageRecord {
        let used = Self::used_today(callers, caller, today).saturating_add(count);
        callers.insert(caller.to_string(), DailyUsage { date: today, count: used });
        let remaining = self.limit.saturating_sub(used);
        UsageRecord {
            used,
            remaining,
            limit_reached: remaining == 0,
        }
    }

    /// Check whether `caller` may process `requested` files on `today`.
    /// Does not change the ledger.
    pub fn check_quota(&self, caller: &str, requested: u32, today: NaiveDate) -> QuotaDecision {
        let callers = self.lock();
        self.decide(Self::used_today(&callers, caller, today), requested)
    }

    /// Add `count` processed files for `caller` on `today`. A record from an
    /// earlier day is replaced.
    pub fn record_usage(&self, caller: &str, count: u32, today: NaiveDate) -> UsageRecord {
        let mut callers = self.lock();
        self.add(&mut callers, caller, count, today)
    }

    /// Check and record in one step. On success the files are counted;
    /// call [`UsageLedger::release`] if the work they were reserved for fails.
    pub fn reserve(
        &self,
        caller: &str,
        requested: u32,
        today: NaiveDate,
    ) -> Result<UsageRecord, QuotaExceeded> {
        let mut callers = self.lock();
        let decision = self.decide(Self::used_today(&callers, caller, today), requested);
        if !decision.allowed {
            return Err(QuotaExceeded {
                requested,
                remaining: decision.remaining,
                limit: self.limit,
            });
        }
        Ok(self.add(&mut callers, caller, requested, today))
    }

    /// Give back `count` files previously reserved on `today`.
    pub fn release(&self, caller: &str, count: u32, today: NaiveDate) {
        let mut callers = self.lock();
        if let Some(usage) = callers.get_mut(caller).filter(|u| u.date == today) {
            usage.count = usage.count.saturating_sub(count);
        }
    }

    pub fn stats(&self, caller: &str, today: NaiveDate) -> UsageStats {
        let used = Self::used_today(&self.lock(), caller, today);
        let percentage = if self.limit == 0 {
            100
        } else {
            (f64::from(used) / f64::from(self.limit) * 100.0).round() as u32
        };
        UsageStats {
            used,
            limit: self.limit,
            remaining: self.limit.saturating_sub(used),
            percentage,
        }
    }

    /// Forget everything recorded for `caller`.
    pub fn reset(&self, caller: &str) {
        self.lock().remove(caller);
    }

    /// Default path for the ledger file: `~/.local/state/filefix/usage.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("filefix")?;
        Ok(xdg_dirs.get_state_home().join("filefix").join("usage.json"))
    }

    /// Load the ledger from `path`; a missing file gives an empty ledger. The
    /// limit always comes from `config`, never from the file.
    pub fn load_from_path(path: &Path, config: &QuotaConfig) -> Result<Self> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new(config)),
            Err(e) => return Err(e).with_context(|| format!("read usage ledger: {}", path.display())),
        };
        let persisted: PersistedLedger = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse usage ledger: {}", path.display()))?;
        Ok(Self {
            limit: config.free_daily_limit,
            callers: Mutex::new(persisted.callers),
        })
    }

    /// Save the ledger to `path`, creating the parent dir if needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let persisted = PersistedLedger {
            callers: self.lock().clone(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&persisted).context("serialize usage ledger")?;
        std::fs::write(path, json)
            .with_context(|| format!("write usage ledger: {}", path.display()))?;
        Ok(())
    }
}
