//! # apivocab-catalog — API Vocabulary Conformance
//!
//! Every application publishes its own `<app>-api-vocabulary.v1.json`
//! inventory listing the attributes it exposes. Each entry pairs a semantic
//! id (what the attribute means) with a canonical term (what it is called on
//! the wire). Inventories stay owned by their applications; this crate is
//! the platform-level gate that keeps them from drifting apart.
//!
//! ## Passes
//!
//! - [`validate_inventory`] — one file on its own: catalog shape, missing
//!   and duplicate semantic ids, `canonicalTerm`/`preferredName` agreement,
//!   snake_case naming.
//! - [`validate_cross_app`] — all files together: one meaning with two
//!   names, one name with two meanings, and retired terms from
//!   [`LEGACY_TERM_MAP`] used alongside their replacements.
//!
//! [`validate_catalog`] runs both and returns a [`CatalogReport`].
//!
//! ## Crate Policy
//!
//! - Read-only: inventories are never rewritten, terms are never auto-fixed.
//! - Only an unreadable directory or file, or a file that is not a JSON
//!   object, is fatal ([`CatalogError`]). Everything else is a
//!   [`Violation`] and the run carries on.
//! - Output order is deterministic for a given set of files.

pub mod cross_app;
pub mod error;
pub mod inventory;
pub mod report;
pub mod validate;
pub mod violation;
pub mod vocabulary;

pub use cross_app::{validate_cross_app, VocabularyIndex};
pub use error::CatalogError;
pub use inventory::{
    discover_inventories, load_inventories, load_inventory, AttributeRecord, Inventory,
    INVENTORY_GLOB,
};
pub use report::{validate_catalog, CatalogReport};
pub use validate::validate_inventory;
pub use violation::Violation;
pub use vocabulary::{is_snake_case, LEGACY_TERM_MAP};
