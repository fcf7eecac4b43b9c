//! Merges the example JSON files into a single `data.js` for the viewer.
//!
//! Every `*.json` below the examples directory is parsed, classified as a
//! domain or a role, tagged with its source path and appended to the matching
//! bucket. A file that fails to read or parse is logged and skipped; it never
//! stops the run.

use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use crate::config::AggregatorConfig;
use crate::error::{Result, TrackerError};
use crate::models::*;

/// A file left out of the collection, and why.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: TrackerError,
}

/// Everything one aggregation pass produced.
#[derive(Debug, Default)]
pub struct AggregateReport {
    pub collection: Collection,
    pub skipped: Vec<SkippedFile>,
}

impl AggregateReport {
    /// One-line summary printed after a run.
    pub fn summary(&self, output: &Path) -> String {
        format!(
            "Generated {} with {} domains and {} roles.",
            output.display(),
            self.collection.domains.len(),
            self.collection.roles.len()
        )
    }
}

/// Classify a parsed file by its name and top-level keys.
pub fn classify(file_name: &str, content: &Value) -> Classification {
    let Value::Object(map) = content else {
        return Classification::Unclassified {
            reason: format!("top-level JSON {} is not an object", json_kind(content)),
        };
    };

    if file_name == DOMAIN_FILE_NAME || map.contains_key(ROLES_KEY) {
        Classification::Domain
    } else {
        Classification::Role
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Hidden files and directories are left out, like a shell glob would.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// All `*.json` files below `root`, sorted by name at each level.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Cannot walk {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .map(DirEntry::into_path)
        .collect()
}

/// Read, classify and tag one file.
pub fn load_record(path: &Path) -> Result<(RecordKind, Record)> {
    let content = std::fs::read_to_string(path).map_err(|e| TrackerError::io(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| TrackerError::json(path, e))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let Some(kind) = classify(&file_name, &value).kind() else {
        return Err(not_an_object(path, &value));
    };
    let mut record = match value {
        Value::Object(map) => map,
        other => return Err(not_an_object(path, &other)),
    };
    record.insert(
        PROVENANCE_FIELD.to_string(),
        Value::String(path.display().to_string()),
    );
    Ok((kind, record))
}

fn not_an_object(path: &Path, value: &Value) -> TrackerError {
    TrackerError::NotAnObject {
        path: path.to_path_buf(),
        kind: json_kind(value),
    }
}

/// Build the collection from every JSON file below `root`.
pub fn aggregate(root: &Path) -> AggregateReport {
    let mut report = AggregateReport::default();

    if !root.is_dir() {
        tracing::warn!("Examples directory {} not found", root.display());
        return report;
    }

    for path in discover(root) {
        match load_record(&path) {
            Ok((kind, record)) => {
                tracing::debug!("{} -> {}", path.display(), kind.as_str());
                report.collection.push(kind, record);
            }
            Err(error) => {
                tracing::warn!("Error reading {}: {}", path.display(), error);
                report.skipped.push(SkippedFile { path, error });
            }
        }
    }

    report
}

/// Render the collection as a script assigning it to `global_var`.
pub fn render_data_js(collection: &Collection, global_var: &str) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(collection)?;
    Ok(format!("{} = {};", global_var, json))
}

/// Aggregate `config.examples_dir` and overwrite `config.output`.
pub fn run(config: &AggregatorConfig) -> Result<AggregateReport> {
    let report = aggregate(&config.examples_dir);
    let script = render_data_js(&report.collection, &config.global_var)
        .map_err(|e| TrackerError::json(&config.output, e))?;

    std::fs::write(&config.output, script).map_err(|e| TrackerError::io(&config.output, e))?;

    tracing::info!(
        "Wrote {} ({} records, {} skipped)",
        config.output.display(),
        report.collection.len(),
        report.skipped.len()
    );
    Ok(report)
}
