//! Error types for bookmark loading and lookup
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the bookmark store and configuration layer.
///
/// Navigation itself never fails: unmatched selectors clamp to the deepest
/// reachable folder, so only loading and configuration surface errors.
#[derive(Error, Debug)]
pub enum BookmarkError {
    /// The bookmark file could not be read
    #[error("Failed to read bookmark file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a bookmark document
    #[error("Failed to parse bookmark document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Strict root lookup found no root with this name
    #[error("Bookmark root not found: {name}")]
    RootNotFound { name: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BookmarkError {
    /// Create an IO error bound to the file it came from
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a root not found error
    pub fn root_not_found(name: impl Into<String>) -> Self {
        Self::RootNotFound { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Machine-readable code, shared with the HTTP error payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::RootNotFound { .. } => "ROOT_NOT_FOUND",
            Self::InvalidConfig(_) => "INVALID_INPUT",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = BookmarkError::io(
            "/tmp/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.to_string().contains("/tmp/missing"));

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(BookmarkError::from(parse).code(), "PARSE_ERROR");

        let err = BookmarkError::root_not_found("synced");
        assert_eq!(err.to_string(), "Bookmark root not found: synced");
        assert_eq!(err.code(), "ROOT_NOT_FOUND");
    }
}
