//! Error types for repoinit-content

use std::path::PathBuf;

/// Result type for repoinit-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving node types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed node metadata at {path}: {source}")]
    MalformedMetadata {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, source: quick_xml::Error) -> Self {
        Self::MalformedMetadata {
            path: path.into(),
            source,
        }
    }
}
