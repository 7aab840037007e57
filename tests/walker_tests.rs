//! File enumeration and ignore-pattern behavior over real directory trees.

use confdiff::{list_files, IgnoreRules};
use std::fs;
use tempfile::TempDir;

fn touch(dir: &TempDir, rel: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, rel).unwrap();
}

fn listed(dir: &TempDir, rules: Option<&IgnoreRules>) -> Vec<String> {
    list_files(dir.path(), rules).into_iter().collect()
}

#[test]
fn test_without_rules_everything_but_git_is_listed() {
    let tree = TempDir::new().unwrap();
    touch(&tree, "kustomize/base/app.yaml");
    touch(&tree, "kustomize/overlays/prod/app.yaml");
    touch(&tree, "README.md");
    touch(&tree, ".git/HEAD");

    assert_eq!(
        listed(&tree, None),
        vec![
            "README.md".to_string(),
            "kustomize/base/app.yaml".to_string(),
            "kustomize/overlays/prod/app.yaml".to_string(),
        ]
    );
}

#[test]
fn test_anchored_pattern_matches_root_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "/top.txt\n").unwrap();
    let rules = IgnoreRules::load(dir.path()).unwrap().unwrap();

    assert!(rules.is_ignored("top.txt", false));
    assert!(!rules.is_ignored("sub/top.txt", false));
}

#[test]
fn test_directory_pattern_leaves_same_named_file() {
    // `build/` prunes directories but must not hide a plain file.
    let tree = TempDir::new().unwrap();
    touch(&tree, "a/build/out.o");
    touch(&tree, "b/build");
    fs::write(tree.path().join(".gitignore"), "build/\n").unwrap();

    let rules = IgnoreRules::load(tree.path()).unwrap().unwrap();
    assert_eq!(
        listed(&tree, Some(&rules)),
        vec![".gitignore".to_string(), "b/build".to_string()]
    );
}

#[test]
fn test_comments_and_blank_lines_are_inert() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "# build artifacts\n\n*.o\n").unwrap();
    let rules = IgnoreRules::load(dir.path()).unwrap().unwrap();

    assert!(rules.is_ignored("main.o", false));
    assert!(!rules.is_ignored("# build artifacts", false));
    assert!(!rules.is_ignored("main.c", false));
}

#[test]
fn test_rules_apply_to_any_tree() {
    // Rules are loaded once and reused for each tree in a comparison.
    let here = TempDir::new().unwrap();
    fs::write(here.path().join(".gitignore"), "*.secret\n").unwrap();
    let rules = IgnoreRules::load(here.path()).unwrap().unwrap();

    let tree = TempDir::new().unwrap();
    touch(&tree, "config.yaml");
    touch(&tree, "api.secret");
    touch(&tree, "nested/api.secret");

    assert_eq!(listed(&tree, Some(&rules)), vec!["config.yaml".to_string()]);
}

#[test]
fn test_double_star_pattern_spans_depths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "docs/**/draft.md\n").unwrap();
    let rules = IgnoreRules::load(dir.path()).unwrap().unwrap();

    assert!(rules.is_ignored("docs/draft.md", false));
    assert!(rules.is_ignored("docs/v2/draft.md", false));
    assert!(!rules.is_ignored("src/draft.md", false));
}

#[test]
fn test_from_file_with_custom_name() {
    let dir = TempDir::new().unwrap();
    let patterns = dir.path().join("extra.ignore");
    fs::write(&patterns, "*.bak\n").unwrap();

    let rules = IgnoreRules::from_file(&patterns).unwrap();
    assert!(rules.is_ignored("old.bak", false));
    assert!(!rules.is_ignored("old.txt", false));
}

#[test]
fn test_empty_gitignore_matches_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "").unwrap();

    let rules = IgnoreRules::load(dir.path()).unwrap();
    assert!(rules.is_some());
    assert!(!rules.unwrap().is_ignored("anything.txt", false));
}
