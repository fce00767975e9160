//! # Per-File Validation
//!
//! Internal well-formedness of a single inventory. Every problem becomes a
//! [`Violation`]; nothing here aborts, and a bad entry never hides the
//! entries after it.

use std::collections::HashSet;

use crate::inventory::Inventory;
use crate::violation::Violation;
use crate::vocabulary::is_snake_case;

/// Check one inventory's catalog and return its violations in entry order.
///
/// - A missing or non-list `attributeCatalog` yields a single violation and
///   nothing else is checked.
/// - Non-object entries are reported and skipped.
/// - An entry without a `semanticId` is reported and skipped; it does not
///   take part in duplicate detection.
/// - A repeated `semanticId` is reported on every repeat after the first,
///   and the repeat is still checked for the remaining rules.
pub fn validate_inventory(inventory: &Inventory) -> Vec<Violation> {
    let file = inventory.file_name();

    if inventory.catalog().is_none() {
        return vec![Violation::CatalogNotList {
            file: file.to_string(),
        }];
    }

    let mut violations = Vec::new();
    let mut seen_semantic: HashSet<String> = HashSet::new();

    for entry in inventory.entries() {
        let Some(record) = entry else {
            violations.push(Violation::EntryNotObject {
                file: file.to_string(),
            });
            continue;
        };

        if record.semantic_id.is_empty() {
            violations.push(Violation::MissingSemanticId {
                file: file.to_string(),
                application: inventory.application().to_string(),
            });
            continue;
        }

        if !seen_semantic.insert(record.semantic_id.clone()) {
            violations.push(Violation::DuplicateSemanticId {
                file: file.to_string(),
                semantic_id: record.semantic_id.clone(),
            });
        }

        if record.canonical_term != record.preferred_name {
            violations.push(Violation::PreferredNameMismatch {
                file: file.to_string(),
                semantic_id: record.semantic_id.clone(),
            });
        }

        if !is_snake_case(&record.canonical_term) {
            violations.push(Violation::NotSnakeCase {
                file: file.to_string(),
                semantic_id: record.semantic_id,
                canonical_term: record.canonical_term,
            });
        }
    }

    if !violations.is_empty() {
        tracing::debug!(
            file,
            count = violations.len(),
            "inventory has per-file violations"
        );
    }

    violations
}
