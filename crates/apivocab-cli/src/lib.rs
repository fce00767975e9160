//! # apivocab-cli — API Vocabulary Gate
//!
//! Provides the `apivocab` command: validate every
//! `*-api-vocabulary.v1.json` inventory in a directory and fail the build
//! when applications drift apart on attribute naming.
//!
//! ```bash
//! apivocab                               # inventories in the current directory
//! apivocab --dir platform-contracts/api-vocabulary
//! apivocab --json -v
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing and output formatting live here; the checks live in
//!   `apivocab-catalog`.
//! - The report goes to stdout, diagnostics to stderr.

pub mod validate;
