//! # Inventory Loading
//!
//! Discovers `*-api-vocabulary.v1.json` files in a directory and parses each
//! into an [`Inventory`]. Discovery is non-recursive and the result is sorted
//! by path so that every run reports in the same order.
//!
//! Inventories are kept as raw JSON objects rather than deserialized into
//! fixed structs: a malformed catalog is something to report, not a reason
//! to stop reading the file.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::CatalogError;

/// Glob-style pattern inventory file names must match.
pub const INVENTORY_GLOB: &str = "*-api-vocabulary.v1.json";

/// Suffix equivalent of [`INVENTORY_GLOB`].
const INVENTORY_SUFFIX: &str = "-api-vocabulary.v1.json";

/// Application name used when an inventory has no `application` field.
pub const MISSING_APPLICATION: &str = "<missing-application>";

/// Key holding the list of attribute entries.
pub const CATALOG_KEY: &str = "attributeCatalog";

/// One application's parsed inventory file.
#[derive(Debug, Clone)]
pub struct Inventory {
    path: PathBuf,
    file_name: String,
    application: String,
    document: Map<String, Value>,
}

impl Inventory {
    /// Build an inventory from an already-parsed top-level object.
    pub fn from_document(path: impl Into<PathBuf>, document: Map<String, Value>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let application = match document.get("application") {
            None | Some(Value::Null) => MISSING_APPLICATION.to_string(),
            Some(value) => value_text(value),
        };
        Self {
            path,
            file_name,
            application,
            document,
        }
    }

    /// Path the inventory was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bare file name, used as the prefix of per-file error messages.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declaring application.
    pub fn application(&self) -> &str {
        &self.application
    }

    /// The `attributeCatalog` list, or `None` if it is absent or not a list.
    pub fn catalog(&self) -> Option<&[Value]> {
        match self.document.get(CATALOG_KEY) {
            Some(Value::Array(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Catalog entries in file order; `None` marks an entry that is not an object.
    ///
    /// Yields nothing when the catalog itself is absent or not a list.
    pub fn entries(&self) -> impl Iterator<Item = Option<AttributeRecord>> + '_ {
        self.catalog()
            .unwrap_or_default()
            .iter()
            .map(|raw| raw.as_object().map(AttributeRecord::from_entry))
    }
}

/// One attribute entry with its three naming fields extracted and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    /// Stable identifier of the business meaning.
    pub semantic_id: String,
    /// Wire-level name.
    pub canonical_term: String,
    /// Name the application prefers; must equal `canonical_term`.
    pub preferred_name: String,
}

impl AttributeRecord {
    /// Extract the naming fields from a catalog entry object.
    ///
    /// Missing and null fields become empty strings.
    pub fn from_entry(entry: &Map<String, Value>) -> Self {
        Self {
            semantic_id: field_text(entry, "semanticId"),
            canonical_term: field_text(entry, "canonicalTerm"),
            preferred_name: field_text(entry, "preferredName"),
        }
    }
}

fn field_text(entry: &Map<String, Value>, key: &str) -> String {
    match entry.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(value) => value_text(value).trim().to_string(),
    }
}

/// Strings verbatim, any other value as its JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Find every inventory file directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`CatalogError::NoInventoriesFound`] when nothing matches and
/// [`CatalogError::Io`] when the directory cannot be listed.
pub fn discover_inventories(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_inventory_name(name) && path.is_file() {
            tracing::debug!(path = %path.display(), "discovered inventory");
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(CatalogError::NoInventoriesFound {
            dir: dir.to_path_buf(),
            pattern: INVENTORY_GLOB,
        });
    }

    paths.sort();
    Ok(paths)
}

/// Whether a file name matches [`INVENTORY_GLOB`]. Hidden files never match.
pub fn is_inventory_name(name: &str) -> bool {
    !name.starts_with('.') && name.ends_with(INVENTORY_SUFFIX)
}

/// Read and parse one inventory file.
///
/// # Errors
///
/// [`CatalogError::Io`] if the file cannot be read, [`CatalogError::Parse`]
/// if it is not JSON, [`CatalogError::NotAnObject`] if the top level is not
/// an object.
pub fn load_inventory(path: &Path) -> Result<Inventory, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(document) => Ok(Inventory::from_document(path, document)),
        _ => Err(CatalogError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Discover and load every inventory in `dir`, in sorted order.
///
/// The first unreadable or malformed file aborts the whole load.
pub fn load_inventories(dir: &Path) -> Result<Vec<Inventory>, CatalogError> {
    let paths = discover_inventories(dir)?;
    let mut inventories = Vec::with_capacity(paths.len());
    for path in &paths {
        let inventory = load_inventory(path)?;
        tracing::debug!(
            path = %path.display(),
            application = inventory.application(),
            "loaded inventory"
        );
        inventories.push(inventory);
    }
    Ok(inventories)
}
