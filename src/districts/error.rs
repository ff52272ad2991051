//! Error types for district table generation

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the districts module
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while generating, writing or reading a district table
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The generator configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The requested district id is not in the table
    #[error("Unknown district: {0}")]
    UnknownDistrict(String),

    /// A record does not have the shape its id class calls for
    #[error("District {id} is not a {expected} record")]
    UnexpectedShape { id: String, expected: &'static str },
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Configuration consistency errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("prefix table is empty")]
    EmptyPrefixTable,

    #[error("prefix table contains an empty prefix")]
    EmptyPrefix,

    #[error("prefix {0:?} is listed more than once")]
    DuplicatePrefix(String),

    /// Counts are 1-based and must cover at least one district
    #[error("prefix {prefix:?} has a count of 0")]
    ZeroCount { prefix: String },

    #[error("tiered id {id:?} is generated by more than one prefix")]
    DuplicateTieredId { id: String },

    #[error("{table} table lists {id:?} more than once")]
    DuplicateId { table: &'static str, id: String },

    #[error("explicit tier names given for {id:?}, which no prefix generates")]
    UnknownTieredId { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = GeneratorError::io(
            "out/districtInfo.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/districtInfo.json"), "{}", msg);
        assert!(msg.contains("denied"), "{}", msg);
    }

    #[test]
    fn test_config_error_converts() {
        let err: GeneratorError = ConfigError::EmptyPrefixTable.into();
        assert!(matches!(err, GeneratorError::Config(ConfigError::EmptyPrefixTable)));
    }
}
