//! Directory comparison command-line interface.
//!
//! Wires the walker, comparator, and report renderer together: resolve and
//! validate the two roots, pick up ignore rules from the invocation
//! directory, compare, print, and choose the exit code.

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use confdiff::{compare_directories, render_report, ComparisonResult, IgnoreRules};
use std::env;
use std::path::PathBuf;
use std::process;

/// Compare two directories recursively, reporting extra files and differing
/// file contents.
#[derive(Parser)]
#[command(name = "confdiff")]
#[command(version)]
#[command(
    about = "Compare two directories recursively, reporting extra files and differing file contents",
    long_about = None
)]
struct Cli {
    /// First directory to compare
    #[arg(value_name = "DIR_A")]
    dir_a: PathBuf,

    /// Second directory to compare
    #[arg(value_name = "DIR_B")]
    dir_b: PathBuf,

    /// Do not fail (exit 0) when differences are found; just output warnings
    #[arg(short = 'w', long)]
    warn_only: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let dir_a = std::path::absolute(&cli.dir_a)?;
    let dir_b = std::path::absolute(&cli.dir_b)?;

    if !dir_a.is_dir() {
        bail!("{} is not a directory", dir_a.display());
    }
    if !dir_b.is_dir() {
        bail!("{} is not a directory", dir_b.display());
    }

    let rules = load_ignore_rules();
    let result = compare_directories(&dir_a, &dir_b, rules.as_ref())?;

    let report = render_report(
        &result,
        &dir_a.display().to_string(),
        &dir_b.display().to_string(),
        cli.warn_only,
    );
    print!("{}", report);

    Ok(exit_code(&result, cli.warn_only))
}

/// Ignore rules come from the invocation directory's `.gitignore` and apply
/// to both trees. A file that cannot be compiled downgrades to a warning;
/// the comparison still runs, just without rules.
fn load_ignore_rules() -> Option<IgnoreRules> {
    let cwd = env::current_dir().ok()?;
    match IgnoreRules::load(&cwd) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!(
                "{}",
                format!(
                    "Warning: could not load .gitignore ({}) - patterns will be ignored",
                    err
                )
                .yellow()
            );
            None
        }
    }
}

/// Only content differences fail the run; extra files on either side alone
/// still exit 0.
fn exit_code(result: &ComparisonResult, warn_only: bool) -> i32 {
    if !result.differing.is_empty() && !warn_only {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn result(only_in_a: Vec<&str>, differing: Vec<&str>) -> ComparisonResult {
        ComparisonResult {
            only_in_a: only_in_a.into_iter().map(String::from).collect(),
            only_in_b: vec![],
            differing: differing.into_iter().map(String::from).collect(),
            structured_diffs: BTreeMap::new(),
        }
    }

    #[test]
    fn test_identical_exits_zero() {
        assert_eq!(exit_code(&result(vec![], vec![]), false), 0);
    }

    #[test]
    fn test_extra_files_alone_exit_zero() {
        assert_eq!(exit_code(&result(vec!["extra.txt"], vec![]), false), 0);
    }

    #[test]
    fn test_content_differences_exit_one() {
        assert_eq!(exit_code(&result(vec![], vec!["app.yaml"]), false), 1);
    }

    #[test]
    fn test_warn_only_exits_zero() {
        assert_eq!(exit_code(&result(vec![], vec!["app.yaml"]), true), 0);
    }
}
