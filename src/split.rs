//! Multi-document YAML splitting.
//!
//! Decomposes a container file holding several YAML documents into one file
//! per document. Output names are derived from each document's `kind` field
//! and `metadata.name` field, sanitized for the filesystem; documents
//! missing either fall back to positional placeholders. Key order inside
//! each document is preserved on re-serialization.

use crate::error::{ParseError, SplitError};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What one [`split_file`] call produced.
#[derive(Debug)]
pub struct SplitOutcome {
    /// Output paths in document order. Under dry-run these are the paths
    /// that would have been written.
    pub outputs: Vec<PathBuf>,
    /// Whether the source file was removed afterwards.
    pub removed_original: bool,
}

/// Splits a multi-document YAML file into sibling single-document files.
///
/// A file with fewer than two documents is left untouched and produces no
/// outputs; splitting it would be pointless, so this is a no-op rather than
/// an error. Output files land next to the source, named
/// `<stem>_<kind>_<name>.yaml`. When two documents derive the same name,
/// later ones are qualified with their 1-based position so nothing within
/// the run is overwritten.
///
/// With `delete_original` set (and not `dry_run`), the source file is
/// removed only after every part has been written.
///
/// # Errors
///
/// Fails when the source cannot be read or parsed, or when an output
/// cannot be serialized or written, or when removing the original fails.
pub fn split_file(
    path: &Path,
    delete_original: bool,
    dry_run: bool,
) -> Result<SplitOutcome, SplitError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    let mut docs = Vec::new();
    for de in serde_yaml::Deserializer::from_str(&content) {
        let doc = Value::deserialize(de)
            .map_err(|e| ParseError::yaml_error(path.to_string_lossy().to_string(), e))?;
        docs.push(doc);
    }

    if docs.len() < 2 {
        return Ok(SplitOutcome {
            outputs: Vec::new(),
            removed_original: false,
        });
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut outputs = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, doc) in docs.iter().enumerate() {
        let file_name = output_file_name(&stem, i, doc, &mut seen);
        let out_path = path.with_file_name(&file_name);

        if !dry_run {
            let serialized = serde_yaml::to_string(doc).map_err(|e| {
                SplitError::serialize_error(out_path.to_string_lossy().to_string(), e)
            })?;
            fs::write(&out_path, serialized)
                .map_err(|e| SplitError::write_error(out_path.to_string_lossy().to_string(), e))?;
        }
        outputs.push(out_path);
    }

    let mut removed_original = false;
    if delete_original && !dry_run {
        fs::remove_file(path)
            .map_err(|e| SplitError::remove_error(path.to_string_lossy().to_string(), e))?;
        removed_original = true;
    }

    Ok(SplitOutcome {
        outputs,
        removed_original,
    })
}

/// Recursively collects the YAML files under `root`, sorted by path.
pub fn yaml_files_under(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_yaml_file(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Whether a path carries a YAML extension (`.yml`/`.yaml`, any case).
pub fn is_yaml_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());
    matches!(ext.as_deref(), Some("yaml") | Some("yml"))
}

fn doc_kind(doc: &Value) -> Option<&str> {
    doc.get("kind")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn doc_name(doc: &Value) -> Option<&str> {
    doc.get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Lower-cases and replaces every character outside `[a-z0-9_.-]` with `-`.
fn sanitize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Derives the unique output name for document `index`, recording it in
/// `seen` so later documents of the same source cannot reuse it.
fn output_file_name(stem: &str, index: usize, doc: &Value, seen: &mut HashSet<String>) -> String {
    let kind = doc_kind(doc)
        .map(sanitize)
        .unwrap_or_else(|| format!("doc{}", index + 1));
    let name = doc_name(doc)
        .map(sanitize)
        .unwrap_or_else(|| format!("item{}", index + 1));
    let base = format!("{}_{}_{}", stem, kind, name);

    let mut candidate = format!("{}.yaml", base);
    let mut bump = index + 1;
    while !seen.insert(candidate.clone()) {
        candidate = format!("{}_{}.yaml", base, bump);
        bump += 1;
    }
    candidate
}
