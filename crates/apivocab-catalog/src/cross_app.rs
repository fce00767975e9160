//! # Cross-Application Validation
//!
//! Aggregates every usable catalog entry of every inventory into global
//! indexes and looks for drift between applications:
//!
//! 1. one semantic id named by more than one canonical term,
//! 2. one canonical term standing for more than one semantic id,
//! 3. a retired term from [`LEGACY_TERM_MAP`] in use alongside its
//!    replacement.
//!
//! All three checks always run. Inventories with per-file problems still
//! contribute whatever entries they have that carry both a semantic id and a
//! canonical term.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::inventory::Inventory;
use crate::violation::Violation;
use crate::vocabulary::LEGACY_TERM_MAP;

/// Global view of which names and meanings each application declares.
///
/// Keys keep the order they were first seen in (inventories in file order,
/// entries in catalog order), which is the order drift violations are
/// reported in. Value sets are sorted.
#[derive(Debug, Default, Clone)]
pub struct VocabularyIndex {
    /// Semantic id → every canonical term seen for it.
    pub semantic_to_terms: IndexMap<String, BTreeSet<String>>,
    /// Canonical term → every semantic id seen for it.
    pub term_to_semantics: IndexMap<String, BTreeSet<String>>,
    /// Canonical term → every application declaring it.
    pub term_to_apps: IndexMap<String, BTreeSet<String>>,
}

impl VocabularyIndex {
    /// Index all entries that have both a semantic id and a canonical term.
    pub fn build(inventories: &[Inventory]) -> Self {
        let mut index = Self::default();
        for inventory in inventories {
            for record in inventory.entries().flatten() {
                if record.semantic_id.is_empty() || record.canonical_term.is_empty() {
                    continue;
                }
                index.insert(
                    inventory.application(),
                    &record.semantic_id,
                    &record.canonical_term,
                );
            }
        }
        index
    }

    fn insert(&mut self, application: &str, semantic_id: &str, canonical_term: &str) {
        self.semantic_to_terms
            .entry(semantic_id.to_string())
            .or_default()
            .insert(canonical_term.to_string());
        self.term_to_semantics
            .entry(canonical_term.to_string())
            .or_default()
            .insert(semantic_id.to_string());
        self.term_to_apps
            .entry(canonical_term.to_string())
            .or_default()
            .insert(application.to_string());
    }

    /// Whether any inventory declares `term` as a canonical term.
    pub fn declares_term(&self, term: &str) -> bool {
        self.term_to_semantics.contains_key(term)
    }

    /// Sorted applications declaring `term`; empty if none.
    pub fn apps_for_term(&self, term: &str) -> Vec<String> {
        self.term_to_apps
            .get(term)
            .map(|apps| apps.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Semantic ids named by more than one canonical term.
    pub fn semantic_id_drift(&self) -> Vec<Violation> {
        self.semantic_to_terms
            .iter()
            .filter(|(_, terms)| terms.len() > 1)
            .map(|(semantic_id, terms)| Violation::SemanticIdDrift {
                semantic_id: semantic_id.clone(),
                canonical_terms: terms.iter().cloned().collect(),
            })
            .collect()
    }

    /// Canonical terms carrying more than one semantic id.
    pub fn canonical_term_drift(&self) -> Vec<Violation> {
        self.term_to_semantics
            .iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(canonical_term, ids)| Violation::CanonicalTermDrift {
                canonical_term: canonical_term.clone(),
                semantic_ids: ids.iter().cloned().collect(),
            })
            .collect()
    }

    /// Legacy/canonical pairs that are both declared somewhere, in map order.
    pub fn legacy_conflicts(&self) -> Vec<Violation> {
        LEGACY_TERM_MAP
            .iter()
            .filter(|(legacy, canonical)| self.declares_term(legacy) && self.declares_term(canonical))
            .map(|(legacy, canonical)| Violation::LegacyConflict {
                legacy_term: (*legacy).to_string(),
                legacy_apps: self.apps_for_term(legacy),
                canonical_term: (*canonical).to_string(),
                canonical_apps: self.apps_for_term(canonical),
            })
            .collect()
    }
}

/// Run every cross-application check and return the violations in order:
/// semantic id drift, canonical term drift, legacy conflicts.
pub fn validate_cross_app(inventories: &[Inventory]) -> Vec<Violation> {
    let index = VocabularyIndex::build(inventories);
    tracing::debug!(
        semantic_ids = index.semantic_to_terms.len(),
        canonical_terms = index.term_to_semantics.len(),
        "built cross-app vocabulary index"
    );

    let mut violations = index.semantic_id_drift();
    violations.extend(index.canonical_term_drift());
    violations.extend(index.legacy_conflicts());
    violations
}
