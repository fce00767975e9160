//! # Catalog Report
//!
//! Runs the per-file pass over every inventory and then the
//! cross-application pass over all of them, collecting one ordered list of
//! violations.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cross_app::validate_cross_app;
use crate::inventory::Inventory;
use crate::validate::validate_inventory;
use crate::violation::Violation;

/// Outcome of validating a full set of inventories.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogReport {
    /// Every application name found, sorted and deduplicated.
    pub applications: BTreeSet<String>,
    /// Per-file violations in inventory order, then cross-app violations.
    pub violations: Vec<Violation>,
}

impl CatalogReport {
    /// True when no violation was found.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations from the per-file pass.
    pub fn per_file_count(&self) -> usize {
        self.violations.iter().filter(|v| !v.is_cross_app()).count()
    }

    /// Number of violations from the cross-application pass.
    pub fn cross_app_count(&self) -> usize {
        self.violations.iter().filter(|v| v.is_cross_app()).count()
    }
}

/// Validate every inventory on its own, then all of them together.
///
/// `inventories` should already be in file-sort order; per-file violations
/// are reported in that order.
pub fn validate_catalog(inventories: &[Inventory]) -> CatalogReport {
    let mut violations: Vec<Violation> = inventories.iter().flat_map(validate_inventory).collect();
    violations.extend(validate_cross_app(inventories));

    let report = CatalogReport {
        applications: inventories
            .iter()
            .map(|inv| inv.application().to_string())
            .collect(),
        violations,
    };

    tracing::info!(
        inventories = inventories.len(),
        per_file = report.per_file_count(),
        cross_app = report.cross_app_count(),
        "catalog validation complete"
    );

    report
}
