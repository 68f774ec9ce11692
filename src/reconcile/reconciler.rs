use serde::Serialize;
use std::collections::BTreeSet;

/// Result of comparing the image inventory with the used references.
///
/// All sets are ordered, so every listing derived from a report is sorted
/// ascending and stable between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    pub inventory: BTreeSet<String>,
    pub used: BTreeSet<String>,
    pub unused: BTreeSet<String>,
}

impl UsageReport {
    pub fn total_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn unused_count(&self) -> usize {
        self.unused.len()
    }

    pub fn all_used(&self) -> bool {
        self.unused.is_empty()
    }
}

/// Compute `inventory - used` with exact, case-sensitive matching.
///
/// `used` may hold references to files that are not in the inventory; they
/// are kept in the report but never show up as unused.
pub fn reconcile(inventory: BTreeSet<String>, used: BTreeSet<String>) -> UsageReport {
    let unused = inventory.difference(&used).cloned().collect();

    UsageReport {
        inventory,
        used,
        unused,
    }
}
