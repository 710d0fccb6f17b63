//! ACL entry record.

use serde::{Deserialize, Serialize};

use crate::path::RepoPath;

/// A single access-control statement tying an operation and a privilege
/// set to a repository path.
///
/// The operation is a grant verb (`allow` or `deny` by convention) and the
/// privilege string is opaque; neither is validated here. The entry owns
/// its script statement format, rendered through [`std::fmt::Display`]:
///
/// ```
/// use repoinit_model::AclEntry;
///
/// let entry = AclEntry::new("allow", "jcr:read", "/content/foo");
/// assert_eq!(entry.to_string(), "allow jcr:read on /content/foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    /// Grant verb, typically `allow` or `deny`.
    pub operation: String,
    /// Privilege names, e.g. `jcr:read,rep:write`.
    pub privileges: String,
    /// Target repository path.
    pub path: RepoPath,
}

impl AclEntry {
    /// Create a new entry. The path is normalized on the way in.
    pub fn new(
        operation: impl Into<String>,
        privileges: impl Into<String>,
        path: impl Into<RepoPath>,
    ) -> Self {
        Self {
            operation: operation.into(),
            privileges: privileges.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for AclEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} on {}", self.operation, self.privileges, self.path)
    }
}
