//! Normalized repository path handling

use serde::{Deserialize, Deserializer, Serialize};

/// An absolute repository path normalized to forward slashes.
///
/// Repository paths always start at the root. Construction converts
/// backslashes to forward slashes and drops empty and trailing segments,
/// so `/content/foo`, `content/foo/` and `\content\foo` compare equal.
///
/// Ordering is lexicographic on the string form, which places every path
/// before its descendants; a `BTreeSet<RepoPath>` therefore iterates
/// ancestors-first along any prefix chain.
///
/// # Examples
///
/// ```
/// use repoinit_model::RepoPath;
///
/// let path = RepoPath::new("content\\foo/");
/// assert_eq!(path.as_str(), "/content/foo");
/// assert_eq!(path.parent(), Some(RepoPath::new("/content")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RepoPath {
    /// Internal representation always uses forward slashes and a leading `/`
    inner: String,
}

impl<'de> Deserialize<'de> for RepoPath {
    /// Deserializes from a plain string, normalizing on the way in.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::new(String::deserialize(deserializer)?))
    }
}

impl RepoPath {
    /// Create a new RepoPath from any string-like input.
    ///
    /// Degenerate input (empty string, bare separators) normalizes to the
    /// root path `/`.
    pub fn new(path: impl AsRef<str>) -> Self {
        let normalized = path.as_ref().replace('\\', "/");
        let mut inner = String::with_capacity(normalized.len() + 1);
        for segment in normalized.split('/').filter(|s| !s.is_empty()) {
            inner.push('/');
            inner.push_str(segment);
        }
        if inner.is_empty() {
            inner.push('/');
        }
        Self { inner }
    }

    /// Get the normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether this is the repository root `/`.
    pub fn is_root(&self) -> bool {
        self.inner == "/"
    }

    /// The path's non-empty components, top-level first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// Get the parent path.
    ///
    /// Stops above single top-level segments: the root itself is never
    /// returned, so `/content` has no parent.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            _ => None,
        }
    }

    /// Iterate over proper ancestors, nearest first.
    ///
    /// `/a/b/c` yields `/a/b` then `/a`. The root is not an ancestor.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            current: self.parent(),
        }
    }
}

/// Iterator over the proper ancestors of a [`RepoPath`], nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors {
    current: Option<RepoPath>,
}

impl Iterator for Ancestors {
    type Item = RepoPath;

    fn next(&mut self) -> Option<RepoPath> {
        let next = self.current.take()?;
        self.current = next.parent();
        Some(next)
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for RepoPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RepoPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
