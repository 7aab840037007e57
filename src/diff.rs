//! Core tree comparison.
//!
//! This module walks two parsed document trees depth-first and records every
//! point where they disagree: keys present on only one side, sequence indices
//! past one side's length, and scalar or shape mismatches. The result order
//! is stable regardless of source formatting: mapping keys are visited in
//! lexicographic order, sequence indices in ascending order, and nested
//! findings follow their parent (pre-order).
//!
//! # Examples
//!
//! ```
//! use confdiff::{diff, Node};
//! use std::collections::BTreeMap;
//!
//! let a = Node::Mapping(BTreeMap::from([
//!     ("replicas".to_string(), Node::Int(2)),
//! ]));
//! let b = Node::Mapping(BTreeMap::from([
//!     ("replicas".to_string(), Node::Int(3)),
//! ]));
//!
//! let found = diff(&a, &b);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].to_string(), "Value differs at replicas: 2 != 3");
//! ```

use crate::tree::Node;
use std::collections::BTreeSet;
use std::fmt;

/// Which input a discrepancy refers to: `A` is the first directory or
/// document, `B` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A single point of disagreement between two trees.
///
/// Each variant renders as one report line via `Display`. Paths are dotted
/// key chains with bracketed indices (`spec.containers[0].image`); an empty
/// path renders as `(root)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Discrepancy {
    /// A mapping key present on only one side; `side` names the side it is
    /// missing from.
    MissingKey { side: Side, path: String },
    /// A sequence index past one side's length.
    MissingIndex { side: Side, path: String },
    /// Both sides have a value here, and the values are not equal.
    ValueMismatch {
        path: String,
        left: Node,
        right: Node,
    },
    /// A file that should have been compared structurally could not be
    /// parsed. Never produced by `diff` itself; the directory comparator
    /// substitutes it for the whole file's comparison.
    ParseFailure { message: String },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::MissingKey { side, path } => {
                write!(f, "Missing key in {}: {}", side, display_path(path))
            }
            Discrepancy::MissingIndex { side, path } => {
                write!(f, "Missing index in {}: {}", side, display_path(path))
            }
            Discrepancy::ValueMismatch { path, left, right } => {
                write!(
                    f,
                    "Value differs at {}: {} != {}",
                    display_path(path),
                    left.render(),
                    right.render()
                )
            }
            Discrepancy::ParseFailure { message } => write!(f, "parse error: {}", message),
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

/// Compares two trees and returns every discrepancy between them.
///
/// Pure and deterministic: the same pair of trees always produces the same
/// sequence, and an empty result means the trees are equal. Swapping the
/// arguments flips each `Side` but reports the same paths.
///
/// # Arguments
///
/// * `a` - The first tree
/// * `b` - The second tree
///
/// # Examples
///
/// ```
/// use confdiff::{diff, Node};
///
/// assert!(diff(&Node::Int(7), &Node::Int(7)).is_empty());
/// assert_eq!(diff(&Node::Int(7), &Node::Null).len(), 1);
/// ```
pub fn diff(a: &Node, b: &Node) -> Vec<Discrepancy> {
    let mut out = Vec::new();
    diff_at(a, b, "", &mut out);
    out
}

/// Recursive worker behind [`diff`]. `path` is the dotted location of the
/// pair being compared; findings are appended to `out` in visit order.
fn diff_at(a: &Node, b: &Node, path: &str, out: &mut Vec<Discrepancy>) {
    match (a, b) {
        (Node::Mapping(ma), Node::Mapping(mb)) => {
            let keys: BTreeSet<&str> = ma.keys().chain(mb.keys()).map(String::as_str).collect();
            for key in keys {
                let child = key_path(path, key);
                match (ma.get(key), mb.get(key)) {
                    (Some(va), Some(vb)) => diff_at(va, vb, &child, out),
                    (None, Some(_)) => out.push(Discrepancy::MissingKey {
                        side: Side::A,
                        path: child,
                    }),
                    (Some(_), None) => out.push(Discrepancy::MissingKey {
                        side: Side::B,
                        path: child,
                    }),
                    // Keys come from the union of both maps.
                    (None, None) => {}
                }
            }
        }
        (Node::Sequence(sa), Node::Sequence(sb)) => {
            for i in 0..sa.len().max(sb.len()) {
                let child = index_path(path, i);
                match (sa.get(i), sb.get(i)) {
                    (Some(va), Some(vb)) => diff_at(va, vb, &child, out),
                    (None, Some(_)) => out.push(Discrepancy::MissingIndex {
                        side: Side::A,
                        path: child,
                    }),
                    (Some(_), None) => out.push(Discrepancy::MissingIndex {
                        side: Side::B,
                        path: child,
                    }),
                    (None, None) => {}
                }
            }
        }
        _ => {
            // Scalar pair or container/scalar shape mismatch: one finding,
            // no descent.
            if a != b {
                out.push(Discrepancy::ValueMismatch {
                    path: path.to_string(),
                    left: a.clone(),
                    right: b.clone(),
                });
            }
        }
    }
}

fn key_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn index_path(prefix: &str, index: usize) -> String {
    format!("{}[{}]", prefix, index)
}
