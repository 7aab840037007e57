//! Custom error types for confdiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not detect file format for {path}")]
    UnknownFormat { path: String },
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn yaml_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.into(),
            source,
        }
    }

    pub fn toml_error(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::TomlError {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::UnknownFormat { path: path.into() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to serialize document for {path}: {source}")]
    SerializeError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    RemoveError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    pub fn serialize_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::SerializeError {
            path: path.into(),
            source,
        }
    }

    pub fn write_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    pub fn remove_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::RemoveError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::file_not_found("test.json");
        assert_eq!(err.to_string(), "File not found: test.json");
    }

    #[test]
    fn test_unknown_format_error() {
        let err = ParseError::unknown_format("/path/to/file.txt");
        assert!(err.to_string().contains("Could not detect file format"));
        assert!(err.to_string().contains("/path/to/file.txt"));
    }

    #[test]
    fn test_split_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SplitError::write_error("out.yaml", io);
        assert_eq!(err.to_string(), "Failed to write out.yaml: denied");
    }

    #[test]
    fn test_split_error_from_parse_error() {
        let parse_err = ParseError::file_not_found("stack.yaml");
        let split_err: SplitError = parse_err.into();
        assert!(matches!(split_err, SplitError::Parse(_)));
    }
}
