//! Counters and gauges for access decisions and catalog loads.
//!
//! These only record into whatever `metrics` recorder the host installs; with
//! no recorder every call is a no-op.

use metrics::{counter, gauge};

pub const ACCESS_DECISIONS_TOTAL: &str = "classkeep_access_decisions_total";
pub const CATALOG_PERMISSIONS: &str = "classkeep_catalog_permissions";
pub const CATALOG_GROUPS: &str = "classkeep_catalog_groups";

/// Record one allow/deny decision.
///
/// `kind` is `"permission"` or `"group"`; `role` is the role tag or `"unknown"`.
pub fn track_access_decision(kind: &'static str, role: &'static str, allowed: bool) {
    let outcome = if allowed { "allow" } else { "deny" };
    counter!(ACCESS_DECISIONS_TOTAL, "kind" => kind, "role" => role, "outcome" => outcome)
        .increment(1);
}

/// Record the size of a freshly loaded catalog.
pub fn track_catalog_loaded(source: &'static str, permissions: usize, groups: usize) {
    gauge!(CATALOG_PERMISSIONS, "source" => source).set(permissions as f64);
    gauge!(CATALOG_GROUPS, "source" => source).set(groups as f64);
}
