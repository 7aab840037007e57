//! Directory comparison driver.
//!
//! Pairs up the files of two trees, routes structured files (YAML, JSON,
//! TOML by extension) through the tree differ and everything else through
//! whole-content hashing, and collects the outcome into a
//! [`ComparisonResult`].

use crate::diff::{diff, Discrepancy};
use crate::parser::parse_file;
use crate::walker::{list_files, IgnoreRules};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Everything one comparison run found, grouped the way the report prints
/// it. Path vectors are sorted; `structured_diffs` holds the per-file
/// discrepancy lines for the `differing` entries that were compared
/// structurally.
#[derive(Debug)]
pub struct ComparisonResult {
    pub only_in_a: Vec<String>,
    pub only_in_b: Vec<String>,
    pub differing: Vec<String>,
    pub structured_diffs: BTreeMap<String, Vec<Discrepancy>>,
}

impl ComparisonResult {
    /// True when both trees contain the same files with the same contents.
    pub fn is_identical(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty() && self.differing.is_empty()
    }
}

/// Compares two directory trees.
///
/// Both trees are enumerated with the same ignore rules. Files present on
/// only one side land in `only_in_a`/`only_in_b`; files present on both are
/// compared pairwise. A structured file that fails to parse on either side
/// is recorded as differing with a single `parse error:` line, and the run
/// continues.
///
/// # Arguments
///
/// * `dir_a` - The first tree root
/// * `dir_b` - The second tree root
/// * `rules` - Ignore rules applied to both trees, if any
///
/// # Errors
///
/// Returns an error when a paired file cannot be read for hashing. Parse
/// failures are not errors here; they become discrepancies.
pub fn compare_directories(
    dir_a: &Path,
    dir_b: &Path,
    rules: Option<&IgnoreRules>,
) -> io::Result<ComparisonResult> {
    let files_a = list_files(dir_a, rules);
    let files_b = list_files(dir_b, rules);

    let only_in_a: Vec<String> = files_a.difference(&files_b).cloned().collect();
    let only_in_b: Vec<String> = files_b.difference(&files_a).cloned().collect();

    let mut differing = Vec::new();
    let mut structured_diffs = BTreeMap::new();

    for rel in files_a.intersection(&files_b) {
        let path_a = dir_a.join(rel);
        let path_b = dir_b.join(rel);

        if is_structured_file(rel) {
            let found = diff_structured_pair(&path_a, &path_b);
            if !found.is_empty() {
                differing.push(rel.clone());
                structured_diffs.insert(rel.clone(), found);
            }
        } else if file_digest(&path_a)? != file_digest(&path_b)? {
            differing.push(rel.clone());
        }
    }

    Ok(ComparisonResult {
        only_in_a,
        only_in_b,
        differing,
        structured_diffs,
    })
}

/// Whether a path's extension marks it for structural comparison.
pub fn is_structured_file(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());
    matches!(
        ext.as_deref(),
        Some("yaml") | Some("yml") | Some("json") | Some("toml")
    )
}

fn diff_structured_pair(path_a: &Path, path_b: &Path) -> Vec<Discrepancy> {
    match (parse_file(path_a), parse_file(path_b)) {
        (Ok(a), Ok(b)) => diff(&a, &b),
        (Err(e), _) | (_, Err(e)) => vec![Discrepancy::ParseFailure {
            message: e.to_string(),
        }],
    }
}

/// BLAKE3 digest of a file's contents, streamed in fixed-size chunks.
pub fn file_digest(path: &Path) -> io::Result<blake3::Hash> {
    let mut file = File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 8192];
    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hasher.finalize())
}
