//! Node-type resolution seam and its filesystem-backed implementation.

use std::fs;
use std::path::PathBuf;

use repoinit_model::RepoPath;

use crate::error::{Error, Result};
use crate::primary_type::PrimaryTypeParser;

/// File holding a node's serialized metadata inside extracted package content.
pub const CONTENT_XML: &str = ".content.xml";

/// Node type declared for paths with no materialized content.
pub const DEFAULT_NODE_TYPE: &str = "sling:Folder";

/// Resolves the node type to declare when creating a repository path.
///
/// Injected into script generation so tests and callers can supply a
/// deterministic function; closures implement it directly.
pub trait NodeTypeResolver {
    fn resolve(&self, path: &RepoPath) -> Result<String>;
}

impl<F> NodeTypeResolver for F
where
    F: Fn(&RepoPath) -> Result<String>,
{
    fn resolve(&self, path: &RepoPath) -> Result<String> {
        self(path)
    }
}

/// Resolves node types by probing extracted package content on disk.
///
/// A repository path maps to the directory of the same name under the
/// content root. Paths without a directory or without `.content.xml`
/// resolve to [`DEFAULT_NODE_TYPE`]; unreadable or malformed metadata is
/// fatal and aborts the resolution.
#[derive(Debug, Clone)]
pub struct PackageContentResolver {
    content_root: PathBuf,
    parser: PrimaryTypeParser,
}

impl PackageContentResolver {
    /// Create a resolver rooted at the directory package content was
    /// extracted into.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            parser: PrimaryTypeParser::new(DEFAULT_NODE_TYPE),
        }
    }

    fn entry(&self, path: &RepoPath) -> PathBuf {
        path.segments()
            .fold(self.content_root.clone(), |dir, segment| dir.join(segment))
    }
}

impl NodeTypeResolver for PackageContentResolver {
    fn resolve(&self, path: &RepoPath) -> Result<String> {
        let directory = self.entry(path);
        if !directory.exists() {
            return Ok(DEFAULT_NODE_TYPE.to_string());
        }

        let metadata = directory.join(CONTENT_XML);
        if !metadata.is_file() {
            return Ok(DEFAULT_NODE_TYPE.to_string());
        }

        let xml = fs::read_to_string(&metadata).map_err(|e| Error::io(&metadata, e))?;
        let node_type = self
            .parser
            .parse(&xml)
            .map_err(|e| Error::malformed(&metadata, e))?;
        tracing::debug!("resolved node type {} for {}", node_type, path);
        Ok(node_type)
    }
}
