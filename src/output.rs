//! Report rendering for the directory comparator.
//!
//! Builds the colored stdout report: a section per bucket of unique files,
//! then the differing files with their per-file discrepancy lines indented
//! beneath them. Colors degrade to plain text automatically when stdout is
//! not a terminal.

use crate::compare::ComparisonResult;
use colored::*;

/// Renders a comparison into the terminal report.
///
/// `dir_a` and `dir_b` are the display names used in section headers
/// (normally the absolutized roots). Under `warn_only` the differing
/// section is labeled as a warning and drawn in yellow instead of red; the
/// content is otherwise identical.
///
/// # Examples
///
/// ```
/// use confdiff::compare::ComparisonResult;
/// use confdiff::output::render_report;
/// use std::collections::BTreeMap;
///
/// let result = ComparisonResult {
///     only_in_a: vec!["old.txt".to_string()],
///     only_in_b: vec![],
///     differing: vec![],
///     structured_diffs: BTreeMap::new(),
/// };
/// let report = render_report(&result, "/tmp/a", "/tmp/b", false);
/// assert!(report.contains("Files only in /tmp/a"));
/// assert!(report.contains("  + old.txt"));
/// ```
pub fn render_report(
    result: &ComparisonResult,
    dir_a: &str,
    dir_b: &str,
    warn_only: bool,
) -> String {
    let mut output = String::new();

    if result.is_identical() {
        output.push_str(&format!("{}\n", "Directories are identical ✨".green()));
        return output;
    }

    if !result.only_in_a.is_empty() {
        push_unique_section(&mut output, dir_a, &result.only_in_a);
    }
    if !result.only_in_b.is_empty() {
        push_unique_section(&mut output, dir_b, &result.only_in_b);
    }

    if !result.differing.is_empty() {
        let header = if warn_only {
            "Files with differing contents (warning):"
        } else {
            "Files with differing contents:"
        };
        output.push_str(&format!("{}\n", header.cyan()));

        for path in &result.differing {
            output.push_str(&format!("{}\n", tone(format!("  ~ {}", path), warn_only)));
            if let Some(discrepancies) = result.structured_diffs.get(path) {
                for d in discrepancies {
                    output.push_str(&format!("{}\n", tone(format!("     {}", d), warn_only)));
                }
            }
        }
        output.push('\n');
    }

    output
}

fn push_unique_section(output: &mut String, dir: &str, paths: &[String]) {
    output.push_str(&format!("{}\n", format!("Files only in {}", dir).cyan()));
    for path in paths {
        output.push_str(&format!("{}\n", format!("  + {}", path).yellow()));
    }
    output.push('\n');
}

fn tone(line: String, warn_only: bool) -> ColoredString {
    if warn_only {
        line.yellow()
    } else {
        line.red()
    }
}
