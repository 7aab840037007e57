//! File parsing for YAML, JSON, and TOML formats.
//!
//! This module turns structured data files into the [`Node`] tree the differ
//! works on. The format is detected by file extension; unknown extensions
//! fall back to attempting JSON then YAML parsing.
//!
//! # Examples
//!
//! ```no_run
//! use confdiff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let node = parse_file(Path::new("config.yaml"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::tree::Node;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parses a file into a [`Node`] tree.
///
/// The format is detected by file extension (.yaml, .yml, .json, .toml,
/// case-insensitive). If the extension is unknown or missing, this function
/// attempts JSON first, then YAML.
///
/// A document whose root is null (an empty YAML file, or a bare `null`/`~`)
/// is normalized to an empty mapping, so two empty documents always compare
/// equal regardless of how they spell "nothing".
///
/// # Arguments
///
/// * `path` - Path to the file to parse
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The content is invalid for its format (`ParseError::JsonError`,
///   `ParseError::YamlError`, `ParseError::TomlError`)
/// - The format cannot be determined (`ParseError::UnknownFormat`)
///
/// # Examples
///
/// ```no_run
/// use confdiff::parser::parse_file;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let node = parse_file(Path::new("deploy.toml"))?;
/// # Ok(())
/// # }
/// ```
pub fn parse_file(path: &Path) -> Result<Node, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());

    let node = match extension.as_deref() {
        Some("json") => parse_json(&content)
            .map_err(|e| ParseError::json_error(path.to_string_lossy().to_string(), e))?,
        Some("yaml") | Some("yml") => parse_yaml(&content)
            .map_err(|e| ParseError::yaml_error(path.to_string_lossy().to_string(), e))?,
        Some("toml") => parse_toml(&content)
            .map_err(|e| ParseError::toml_error(path.to_string_lossy().to_string(), e))?,
        _ => {
            // Try JSON first, then YAML
            parse_json(&content)
                .map_err(|_| ())
                .or_else(|_| parse_yaml(&content).map_err(|_| ()))
                .map_err(|_| ParseError::unknown_format(path.to_string_lossy().to_string()))?
        }
    };

    Ok(normalize_root(node))
}

/// Parses a JSON string into a [`Node`].
///
/// # Examples
///
/// ```
/// use confdiff::parser::parse_json;
///
/// let node = parse_json(r#"{"name": "api", "port": 8080}"#).unwrap();
/// ```
pub fn parse_json(content: &str) -> Result<Node, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_node(value))
}

/// Parses a YAML string into a [`Node`].
///
/// # Examples
///
/// ```
/// use confdiff::parser::parse_yaml;
///
/// let node = parse_yaml("name: api\nport: 8080").unwrap();
/// ```
pub fn parse_yaml(content: &str) -> Result<Node, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_node(value))
}

/// Parses a TOML string into a [`Node`].
///
/// # Examples
///
/// ```
/// use confdiff::parser::parse_toml;
///
/// let node = parse_toml("name = \"api\"\nport = 8080").unwrap();
/// ```
pub fn parse_toml(content: &str) -> Result<Node, toml::de::Error> {
    let value: toml::Value = toml::from_str(content)?;
    Ok(toml_to_node(value))
}

/// A null root becomes an empty mapping. Nested nulls are left alone.
fn normalize_root(node: Node) -> Node {
    match node {
        Node::Null => Node::Mapping(BTreeMap::new()),
        other => other,
    }
}

/// Converts a `serde_json::Value` into a [`Node`].
///
/// JSON numbers that fit in `i64` become `Int`; everything else (fractions,
/// out-of-range magnitudes) becomes `Float`.
fn json_to_node(value: serde_json::Value) -> Node {
    match value {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Int(i)
            } else if let Some(f) = n.as_f64() {
                Node::Float(f)
            } else {
                Node::Float(0.0)
            }
        }
        serde_json::Value::String(s) => Node::String(s),
        serde_json::Value::Array(arr) => {
            Node::Sequence(arr.into_iter().map(json_to_node).collect())
        }
        serde_json::Value::Object(obj) => {
            let map: BTreeMap<String, Node> =
                obj.into_iter().map(|(k, v)| (k, json_to_node(v))).collect();
            Node::Mapping(map)
        }
    }
}

/// Converts a `serde_yaml::Value` into a [`Node`].
///
/// YAML anchors and aliases are already resolved by the parser; tagged
/// values keep their payload and drop the tag. Non-string mapping keys are
/// converted to strings.
fn yaml_to_node(value: serde_yaml::Value) -> Node {
    match value {
        serde_yaml::Value::Null => Node::Null,
        serde_yaml::Value::Bool(b) => Node::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Int(i)
            } else if let Some(u) = n.as_u64() {
                Node::Float(u as f64)
            } else if let Some(f) = n.as_f64() {
                Node::Float(f)
            } else {
                Node::Float(0.0)
            }
        }
        serde_yaml::Value::String(s) => Node::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Node::Sequence(seq.into_iter().map(yaml_to_node).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let tree_map: BTreeMap<String, Node> = map
                .into_iter()
                .map(|(k, v)| {
                    let key_str = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        serde_yaml::Value::Null => "null".to_string(),
                        other => format!("{:?}", other),
                    };
                    (key_str, yaml_to_node(v))
                })
                .collect();
            Node::Mapping(tree_map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_node(tagged.value),
    }
}

/// Converts a `toml::Value` into a [`Node`].
///
/// Datetimes are carried as their string form; there is no datetime scalar
/// in the tree.
fn toml_to_node(value: toml::Value) -> Node {
    match value {
        toml::Value::String(s) => Node::String(s),
        toml::Value::Integer(i) => Node::Int(i),
        toml::Value::Float(f) => Node::Float(f),
        toml::Value::Boolean(b) => Node::Bool(b),
        toml::Value::Datetime(dt) => Node::String(dt.to_string()),
        toml::Value::Array(arr) => Node::Sequence(arr.into_iter().map(toml_to_node).collect()),
        toml::Value::Table(table) => {
            let map: BTreeMap<String, Node> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_node(v)))
                .collect();
            Node::Mapping(map)
        }
    }
}
