//! Value tree representation for parsed structured data.

use std::collections::BTreeMap;

/// A node in a parsed document tree (YAML, JSON, TOML).
///
/// Mappings use a `BTreeMap` so key iteration is lexicographic and equality
/// never depends on source key order. Integers and floats are kept as
/// distinct scalar kinds: `Int(1)` and `Float(1.0)` are different values.
#[derive(Debug, Clone)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Node>),
    Mapping(BTreeMap<String, Node>),
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Int(a), Node::Int(b)) => a == b,
            // NaN is equal to itself here so comparing a tree against
            // itself never reports a difference.
            (Node::Float(a), Node::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Sequence(a), Node::Sequence(b)) => a == b,
            (Node::Mapping(a), Node::Mapping(b)) => a == b,
            _ => false,
        }
    }
}

impl Node {
    pub fn type_name(&self) -> &str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Int(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }

    /// Renders the node for a report line.
    ///
    /// Scalars are shown exactly (strings quoted, whole floats keep one
    /// decimal so they stay distinguishable from integers); containers are
    /// summarized by their entry count.
    ///
    /// # Examples
    ///
    /// ```
    /// use confdiff::tree::Node;
    ///
    /// assert_eq!(Node::Int(42).render(), "42");
    /// assert_eq!(Node::Float(1.0).render(), "1.0");
    /// assert_eq!(Node::String("on".into()).render(), "\"on\"");
    /// assert_eq!(Node::Sequence(vec![Node::Null, Node::Null]).render(), "[ 2 items ]");
    /// ```
    pub fn render(&self) -> String {
        match self {
            Node::Null => "null".to_string(),
            Node::Bool(b) => b.to_string(),
            Node::Int(n) => n.to_string(),
            Node::Float(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{:.1}", n)
                } else {
                    n.to_string()
                }
            }
            Node::String(s) => format!("\"{}\"", s),
            Node::Mapping(map) => {
                let count = map.len();
                if count == 0 {
                    "{}".to_string()
                } else if count == 1 {
                    format!("{{ {} key }}", count)
                } else {
                    format!("{{ {} keys }}", count)
                }
            }
            Node::Sequence(seq) => {
                let count = seq.len();
                if count == 0 {
                    "[]".to_string()
                } else if count == 1 {
                    format!("[ {} item ]", count)
                } else {
                    format!("[ {} items ]", count)
                }
            }
        }
    }
}
