//! # Error Types
//!
//! Fatal failures of the inventory loader. Everything that can be reported
//! and moved past (structural problems, field problems, drift) is a
//! [`Violation`](crate::Violation) instead; the variants here abort the run.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised while discovering or loading inventories.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No file in the directory matched the inventory naming pattern.
    #[error("no inventory files found under {} using {pattern}", .dir.display())]
    NoInventoriesFound {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Glob-style pattern inventory files must match.
        pattern: &'static str,
    },

    /// An inventory file is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying parser error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// An inventory file parsed as JSON but its top level is not an object.
    #[error("inventory {} must contain a JSON object at the top level", .path.display())]
    NotAnObject {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// Reading the directory or a file failed.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
