//! Error types for repoinit-acl

use repoinit_model::RepoPath;

/// Result type for repoinit-acl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during script generation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Node-type resolution failed for a path the script must create.
    #[error("Failed to resolve node type for {path}")]
    TypeResolution {
        path: RepoPath,
        #[source]
        source: repoinit_content::Error,
    },
}

impl Error {
    pub fn resolution(path: RepoPath, source: repoinit_content::Error) -> Self {
        Self::TypeResolution { path, source }
    }
}
