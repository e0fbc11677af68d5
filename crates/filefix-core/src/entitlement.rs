//! Caller entitlements and the usage gate.
//!
//! Who is privileged comes from explicit configuration (owner and pro email
//! lists), never from process environment. Paid and admin callers bypass the
//! daily quota; everyone else is metered through the [`UsageLedger`].

use crate::usage::{QuotaExceeded, UsageLedger, UsageRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ledger key used for callers without an identity.
pub const ANONYMOUS_CALLER: &str = "anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Paid,
    Admin,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Paid => "paid",
            Tier::Admin => "admin",
        }
    }
}

/// What a caller is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallerEntitlement {
    pub tier: Tier,
}

impl CallerEntitlement {
    pub fn new(tier: Tier) -> Self {
        Self { tier }
    }

    /// Paid and admin callers are not metered.
    pub fn is_privileged(&self) -> bool {
        matches!(self.tier, Tier::Paid | Tier::Admin)
    }
}

/// Entitlement lists (`[entitlements]` section of config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementConfig {
    /// Emails treated as admins.
    #[serde(default)]
    pub owners: Vec<String>,
    /// Emails with a paid plan.
    #[serde(default)]
    pub pro_users: Vec<String>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl EntitlementConfig {
    /// Resolve the entitlement for an optional caller email. Emails compare
    /// trimmed and case-insensitively; owners win over pro users.
    pub fn resolve(&self, email: Option<&str>) -> CallerEntitlement {
        let Some(email) = email.map(normalize_email).filter(|e| !e.is_empty()) else {
            return CallerEntitlement::default();
        };
        let listed = |list: &[String]| list.iter().any(|e| normalize_email(e) == email);

        if listed(self.owners.as_slice()) {
            CallerEntitlement::new(Tier::Admin)
        } else if listed(self.pro_users.as_slice()) {
            CallerEntitlement::new(Tier::Paid)
        } else {
            CallerEntitlement::new(Tier::Free)
        }
    }
}

/// Ledger key for an optional caller email.
pub fn caller_key(email: Option<&str>) -> String {
    email
        .map(normalize_email)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| ANONYMOUS_CALLER.to_string())
}

/// Outcome of the usage gate for an allowed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Privileged caller; nothing was counted.
    Unlimited,
    /// Free caller; the files were reserved against today's quota.
    Metered(UsageRecord),
}

/// Gate a request to process `count` files.
///
/// Free callers reserve `count` files in `ledger` (release them with
/// [`UsageLedger::release`] if the build fails); privileged callers pass
/// without touching it.
pub fn authorize(
    entitlement: CallerEntitlement,
    ledger: &UsageLedger,
    caller: &str,
    count: u32,
    today: NaiveDate,
) -> Result<GateDecision, QuotaExceeded> {
    if entitlement.is_privileged() {
        tracing::debug!(caller, count, tier = ?entitlement.tier, "quota bypassed");
        return Ok(GateDecision::Unlimited);
    }
    let record = ledger.reserve(caller, count, today)?;
    tracing::debug!(caller, count, used = record.used, remaining = record.remaining, "quota reserved");
    Ok(GateDecision::Metered(record))
}
