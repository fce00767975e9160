//! # Validate Command
//!
//! Loads every inventory in the target directory, runs the per-file and
//! cross-application passes, and prints either the full list of violations
//! or a one-line success summary.
//!
//! Exit status: 0 when every check passes, 1 when no inventories were
//! found or any violation was reported. Load failures (unreadable file,
//! invalid JSON) are returned as errors and handled by `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use apivocab_catalog::{load_inventories, validate_catalog, CatalogError, CatalogReport};

/// Arguments for the validator.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Directory holding the `*-api-vocabulary.v1.json` inventories;
    /// defaults to the current working directory.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// One reported error in JSON output.
#[derive(Debug, Serialize)]
struct JsonError {
    kind: &'static str,
    message: String,
}

/// JSON form of the report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    ok: bool,
    applications: Vec<&'a str>,
    errors: Vec<JsonError>,
}

/// Execute the validator and return the process exit code.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    tracing::debug!(dir = %args.dir.display(), "scanning for inventories");

    let inventories = match load_inventories(&args.dir) {
        Ok(inventories) => inventories,
        Err(CatalogError::NoInventoriesFound { dir, pattern }) => {
            print_no_inventories(&dir, pattern, args.json)?;
            return Ok(1);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to load inventories from {}", args.dir.display())
            });
        }
    };

    tracing::info!(count = inventories.len(), "loaded inventories");

    let report = validate_catalog(&inventories);

    if args.json {
        print_json(&report)?;
    } else {
        for line in render_text(&report) {
            println!("{line}");
        }
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

/// Text lines for a report: a failure header followed by one line per
/// violation, or a single success line.
pub fn render_text(report: &CatalogReport) -> Vec<String> {
    if report.is_clean() {
        let apps: Vec<&str> = report.applications.iter().map(String::as_str).collect();
        return vec![format!(
            "API vocabulary catalog validation passed for apps: {}",
            apps.join(", ")
        )];
    }

    let mut lines = Vec::with_capacity(report.violations.len() + 1);
    lines.push("API vocabulary catalog validation failed:".to_string());
    lines.extend(report.violations.iter().map(|v| format!(" - {v}")));
    lines
}

/// The discovery diagnostic printed when the directory has no inventories.
pub fn no_inventories_message(dir: &Path, pattern: &str) -> String {
    format!("No inventory files found under {} using {pattern}", dir.display())
}

fn print_no_inventories(dir: &Path, pattern: &str, json: bool) -> Result<()> {
    let message = no_inventories_message(dir, pattern);
    if json {
        let out = JsonReport {
            ok: false,
            applications: Vec::new(),
            errors: vec![JsonError {
                kind: "no_inventories_found",
                message,
            }],
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{message}");
    }
    Ok(())
}

fn print_json(report: &CatalogReport) -> Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}

/// Pretty-printed JSON document for a report.
pub fn render_json(report: &CatalogReport) -> Result<String> {
    let errors = report
        .violations
        .iter()
        .map(|violation| JsonError {
            kind: violation.kind(),
            message: violation.to_string(),
        })
        .collect();

    let out = JsonReport {
        ok: report.is_clean(),
        applications: report.applications.iter().map(String::as_str).collect(),
        errors,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}
