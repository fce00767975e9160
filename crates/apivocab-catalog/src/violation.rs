//! # Violations
//!
//! Soft findings produced by the per-file and cross-application passes.
//! A violation never stops the run; all of them are collected and reported
//! together. The `Display` text of each variant is the exact line printed by
//! the CLI.

use serde::Serialize;
use thiserror::Error;

/// A single conformance problem found in one or more inventories.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// `attributeCatalog` is absent or not a list.
    #[error("{file}: attributeCatalog must be a list")]
    CatalogNotList {
        /// Inventory file name.
        file: String,
    },

    /// A catalog entry is not a JSON object.
    #[error("{file}: attributeCatalog entries must be objects")]
    EntryNotObject {
        /// Inventory file name.
        file: String,
    },

    /// An entry has an empty or missing `semanticId`.
    #[error("{file}: missing semanticId entry in {application}")]
    MissingSemanticId {
        /// Inventory file name.
        file: String,
        /// Declaring application.
        application: String,
    },

    /// A `semanticId` repeats within one inventory.
    #[error("{file}: duplicate semanticId in app inventory: {semantic_id}")]
    DuplicateSemanticId {
        /// Inventory file name.
        file: String,
        /// The repeated id.
        semantic_id: String,
    },

    /// `canonicalTerm` and `preferredName` differ.
    #[error("{file}: canonicalTerm/preferredName mismatch for {semantic_id}")]
    PreferredNameMismatch {
        /// Inventory file name.
        file: String,
        /// Entry's semantic id.
        semantic_id: String,
    },

    /// `canonicalTerm` is not lowercase snake_case.
    #[error("{file}: canonicalTerm must be snake_case for {semantic_id}: {canonical_term}")]
    NotSnakeCase {
        /// Inventory file name.
        file: String,
        /// Entry's semantic id.
        semantic_id: String,
        /// The offending term.
        canonical_term: String,
    },

    /// One semantic id is named differently by different entries.
    #[error("cross-app drift: same semanticId has multiple canonical terms: {semantic_id} -> {canonical_terms:?}")]
    SemanticIdDrift {
        /// The drifting id.
        semantic_id: String,
        /// Every term seen for it, sorted.
        canonical_terms: Vec<String>,
    },

    /// One canonical term carries more than one meaning.
    #[error("cross-app drift: same canonicalTerm maps to multiple semanticIds: {canonical_term} -> {semantic_ids:?}")]
    CanonicalTermDrift {
        /// The overloaded term.
        canonical_term: String,
        /// Every semantic id seen for it, sorted.
        semantic_ids: Vec<String>,
    },

    /// A retired term and its replacement are both in use.
    #[error(
        "legacy/canonical conflict across inventories: {legacy_term} (apps={}) vs {canonical_term} (apps={})",
        .legacy_apps.join(","),
        .canonical_apps.join(",")
    )]
    LegacyConflict {
        /// The retired term.
        legacy_term: String,
        /// Applications still declaring it, sorted.
        legacy_apps: Vec<String>,
        /// Its canonical replacement.
        canonical_term: String,
        /// Applications declaring the replacement, sorted.
        canonical_apps: Vec<String>,
    },
}

impl Violation {
    /// Stable snake_case tag for the variant, the same value serialized
    /// under `"kind"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CatalogNotList { .. } => "catalog_not_list",
            Self::EntryNotObject { .. } => "entry_not_object",
            Self::MissingSemanticId { .. } => "missing_semantic_id",
            Self::DuplicateSemanticId { .. } => "duplicate_semantic_id",
            Self::PreferredNameMismatch { .. } => "preferred_name_mismatch",
            Self::NotSnakeCase { .. } => "not_snake_case",
            Self::SemanticIdDrift { .. } => "semantic_id_drift",
            Self::CanonicalTermDrift { .. } => "canonical_term_drift",
            Self::LegacyConflict { .. } => "legacy_conflict",
        }
    }

    /// True for findings from the cross-application pass.
    pub fn is_cross_app(&self) -> bool {
        matches!(
            self,
            Self::SemanticIdDrift { .. } | Self::CanonicalTermDrift { .. } | Self::LegacyConflict { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_message_lists_sorted_terms() {
        let v = Violation::SemanticIdDrift {
            semantic_id: "s1".into(),
            canonical_terms: vec!["cif_id".into(), "client_id".into()],
        };
        assert_eq!(
            v.to_string(),
            r#"cross-app drift: same semanticId has multiple canonical terms: s1 -> ["cif_id", "client_id"]"#
        );
        assert!(v.is_cross_app());
    }

    #[test]
    fn legacy_conflict_joins_apps_with_commas() {
        let v = Violation::LegacyConflict {
            legacy_term: "cif_id".into(),
            legacy_apps: vec!["core-banking".into(), "kyc".into()],
            canonical_term: "client_id".into(),
            canonical_apps: vec![],
        };
        assert_eq!(
            v.to_string(),
            "legacy/canonical conflict across inventories: cif_id (apps=core-banking,kyc) vs client_id (apps=)"
        );
    }

    #[test]
    fn per_file_messages_are_prefixed_with_file() {
        let v = Violation::NotSnakeCase {
            file: "crm-api-vocabulary.v1.json".into(),
            semantic_id: "party.client.id".into(),
            canonical_term: "clientId".into(),
        };
        assert_eq!(
            v.to_string(),
            "crm-api-vocabulary.v1.json: canonicalTerm must be snake_case for party.client.id: clientId"
        );
        assert!(!v.is_cross_app());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let v = Violation::DuplicateSemanticId {
            file: "crm-api-vocabulary.v1.json".into(),
            semantic_id: "s1".into(),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "duplicate_semantic_id");
        assert_eq!(json["semantic_id"], "s1");
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let file = || "crm-api-vocabulary.v1.json".to_string();
        let all = [
            Violation::CatalogNotList { file: file() },
            Violation::EntryNotObject { file: file() },
            Violation::MissingSemanticId {
                file: file(),
                application: "crm".into(),
            },
            Violation::DuplicateSemanticId {
                file: file(),
                semantic_id: "s1".into(),
            },
            Violation::PreferredNameMismatch {
                file: file(),
                semantic_id: "s1".into(),
            },
            Violation::NotSnakeCase {
                file: file(),
                semantic_id: "s1".into(),
                canonical_term: "ClientId".into(),
            },
            Violation::SemanticIdDrift {
                semantic_id: "s1".into(),
                canonical_terms: vec!["a".into(), "b".into()],
            },
            Violation::CanonicalTermDrift {
                canonical_term: "a".into(),
                semantic_ids: vec!["s1".into(), "s2".into()],
            },
            Violation::LegacyConflict {
                legacy_term: "cif_id".into(),
                legacy_apps: vec!["b".into()],
                canonical_term: "client_id".into(),
                canonical_apps: vec!["a".into()],
            },
        ];
        for v in &all {
            let json = serde_json::to_value(v).unwrap();
            assert_eq!(json["kind"], v.kind(), "{v:?}");
        }
    }
}
