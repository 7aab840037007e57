//! Recursive file enumeration with ignore rules.
//!
//! This module gathers the relative paths the comparator works on. The
//! `.git` directory is always skipped, and an optional set of
//! `.gitignore`-style rules can suppress further paths. Ignored directories
//! are pruned before descent, so their subtrees are never walked.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Compiled `.gitignore` patterns, matched against tree-relative paths.
///
/// The same rules are applied to every tree in a comparison, so two trees
/// are always filtered symmetrically.
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Loads `.gitignore` from `dir`.
    ///
    /// Returns `Ok(None)` when `dir` has no `.gitignore`; that is the
    /// common case, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or contains
    /// patterns that do not compile.
    pub fn load(dir: &Path) -> Result<Option<Self>, ignore::Error> {
        let path = dir.join(".gitignore");
        if !path.is_file() {
            return Ok(None);
        }
        Self::from_file(&path).map(Some)
    }

    /// Compiles the patterns in one `.gitignore`-format file.
    pub fn from_file(path: &Path) -> Result<Self, ignore::Error> {
        // Empty root: callers match with tree-relative paths directly.
        let mut builder = GitignoreBuilder::new("");
        if let Some(err) = builder.add(path) {
            return Err(err);
        }
        let matcher = builder.build()?;
        Ok(IgnoreRules { matcher })
    }

    /// Whether `rel_path` (a `/`-separated tree-relative path) matches an
    /// ignore pattern. Negation patterns (`!keep.txt`) re-include paths and
    /// make this return false.
    pub fn is_ignored(&self, rel_path: &str, is_dir: bool) -> bool {
        self.matcher.matched(rel_path, is_dir).is_ignore()
    }
}

/// Recursively enumerates regular files under `root`.
///
/// Paths come back root-relative with `/` separators, sorted. The `.git`
/// directory is pruned at any depth; `rules`, when present, suppress
/// matching files and prune matching directories. Entries that cannot be
/// read are skipped.
pub fn list_files(root: &Path, rules: Option<&IgnoreRules>) -> BTreeSet<String> {
    let mut files = BTreeSet::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        if entry.file_type().is_dir() && entry.file_name() == ".git" {
            return false;
        }
        match rules {
            Some(rules) => match entry.path().strip_prefix(root) {
                Ok(rel) => !rules.is_ignored(&rel_string(rel), entry.file_type().is_dir()),
                Err(_) => true,
            },
            None => true,
        }
    });

    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Ok(rel) = entry.path().strip_prefix(root) {
                files.insert(rel_string(rel));
            }
        }
    }

    files
}

fn rel_string(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
