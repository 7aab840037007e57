//! confdiff - semantic directory comparison for structured config trees.
//!
//! This library compares two directory trees, diffing YAML, JSON, and TOML
//! files structurally (formatting and key order are irrelevant) and all
//! other files by content hash. It also provides the multi-document YAML
//! splitter behind the `confsplit` binary.
//!
//! # Example
//!
//! ```no_run
//! use confdiff::{compare_directories, render_report};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = compare_directories(Path::new("staging"), Path::new("prod"), None)?;
//! let report = render_report(&result, "staging", "prod", false);
//! print!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod diff;
pub mod error;
pub mod output;
pub mod parser;
pub mod split;
pub mod tree;
pub mod walker;

// Re-export commonly used types for convenience
pub use compare::{compare_directories, is_structured_file, ComparisonResult};
pub use diff::{diff, Discrepancy, Side};
pub use error::{ParseError, SplitError};
pub use output::render_report;
pub use parser::{parse_file, parse_json, parse_toml, parse_yaml};
pub use split::{split_file, yaml_files_under, SplitOutcome};
pub use tree::Node;
pub use walker::{list_files, IgnoreRules};
