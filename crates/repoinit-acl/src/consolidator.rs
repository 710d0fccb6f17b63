//! Consolidation of ACL registrations into an ordered repoinit script.

use std::collections::{BTreeMap, BTreeSet};

use repoinit_content::NodeTypeResolver;
use repoinit_model::{AclEntry, RepoPath};

use crate::error::{Error, Result};
use crate::extension::{Extension, REPOINIT_EXTENSION_NAME};

/// Accumulates system users, hierarchical paths, and per-user ACL entries,
/// and emits them as one ordered repoinit script.
///
/// Statement order is significant: paths are created first, then each
/// service user followed by its ACL block, so every statement only
/// references targets that already exist. One instance serves one
/// conversion run; [`reset`](Self::reset) returns it to the empty
/// accumulating state for the next run.
///
/// # Examples
///
/// ```
/// use repoinit_acl::AclConsolidator;
/// use repoinit_content::DEFAULT_NODE_TYPE;
/// use repoinit_model::RepoPath;
///
/// fn default_type(_: &RepoPath) -> repoinit_content::Result<String> {
///     Ok(DEFAULT_NODE_TYPE.to_string())
/// }
///
/// let mut consolidator = AclConsolidator::new();
/// consolidator.register_system_user("sling-reader");
/// consolidator.register_acl("sling-reader", "allow", "jcr:read", "/content/foo");
///
/// let script = consolidator.generate_script(&default_type).unwrap().unwrap();
/// assert!(script.starts_with("create path (sling:Folder) /content\n"));
/// ```
#[derive(Debug, Default)]
pub struct AclConsolidator {
    /// Users the caller flagged as expected to exist; guards registration
    /// and the leftover filter.
    pre_provided: Vec<String>,
    /// Users to emit `create service user` for, in registration order.
    system_users: Vec<String>,
    /// Every path referenced by an ACL entry plus all implied ancestors,
    /// in lexicographic order.
    paths: BTreeSet<RepoPath>,
    /// Per-user ACL lists, insertion-ordered within a user.
    registrations: BTreeMap<String, Vec<AclEntry>>,
}

impl AclConsolidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system user expected to exist before ACLs are applied.
    ///
    /// Returns true iff `id` is non-empty and not yet registered; on
    /// success the user joins both the pre-provided set and the emission
    /// list. Re-registering is a safe no-op returning false, as is an
    /// empty id.
    pub fn register_system_user(&mut self, id: &str) -> bool {
        if id.is_empty() || self.pre_provided.iter().any(|user| user == id) {
            return false;
        }
        self.pre_provided.push(id.to_string());
        self.system_users.push(id.to_string());
        true
    }

    /// Record an ACL entry for `user`, inserting the target path and every
    /// ancestor into the path set.
    ///
    /// Never fails and does not require `user` to be registered as a
    /// system user; entries for unregistered users are simply never
    /// emitted. Returns the stored entry so the caller can annotate it.
    pub fn register_acl(
        &mut self,
        user: &str,
        operation: &str,
        privileges: &str,
        path: &str,
    ) -> &mut AclEntry {
        let path = RepoPath::new(path);
        self.add_path(&path);

        let entries = self.registrations.entry(user.to_string()).or_default();
        let index = entries.len();
        entries.push(AclEntry::new(operation, privileges, path));
        &mut entries[index]
    }

    /// Insert `path` and each proper ancestor, iteratively.
    fn add_path(&mut self, path: &RepoPath) {
        for ancestor in path.ancestors() {
            self.paths.insert(ancestor);
        }
        self.paths.insert(path.clone());
    }

    /// Registered system users, in registration order.
    pub fn system_users(&self) -> &[String] {
        &self.system_users
    }

    /// All accumulated paths, in lexicographic (emission) order.
    pub fn paths(&self) -> impl Iterator<Item = &RepoPath> {
        self.paths.iter()
    }

    /// Generate the ordered repoinit script, or `None` when no system user
    /// was ever registered (callers skip emission entirely).
    ///
    /// Emission drains each registered user's ACL list, so a repeated call
    /// before [`reset`](Self::reset) yields the same path and user lines
    /// with empty ACL bodies. A resolution failure aborts the whole call;
    /// no partial script is returned.
    pub fn generate_script<R: NodeTypeResolver>(&mut self, resolver: &R) -> Result<Option<String>> {
        if self.system_users.is_empty() {
            return Ok(None);
        }

        let mut script = String::new();

        // make sure all paths are created first
        for path in &self.paths {
            let node_type = resolver
                .resolve(path)
                .map_err(|source| Error::resolution(path.clone(), source))?;
            script.push_str(&format!("create path ({}) {}\n", node_type, path));
        }

        // create then the users, each with its accumulated ACL block
        for user in &self.system_users {
            script.push_str(&format!("create service user {}\n", user));
            if let Some(entries) = self.registrations.remove(user) {
                append_acl_block(&mut script, user, &entries);
            }
        }

        // leftover registrations are only honored for pre-provided users
        for (user, entries) in &self.registrations {
            if self.pre_provided.iter().any(|known| known == user) {
                append_acl_block(&mut script, user, entries);
            } else {
                tracing::warn!(
                    "dropping {} ACL entries for {}: never registered as a system user",
                    entries.len(),
                    user
                );
            }
        }

        tracing::debug!(
            "generated repoinit script for {} paths and {} service users",
            self.paths.len(),
            self.system_users.len()
        );
        Ok(Some(script))
    }

    /// Generate the script and wrap it as the `repoinit` extension payload
    /// for the feature-model assembler.
    pub fn repoinit_extension<R: NodeTypeResolver>(
        &mut self,
        resolver: &R,
    ) -> Result<Option<Extension>> {
        Ok(self
            .generate_script(resolver)?
            .map(|text| Extension::text(REPOINIT_EXTENSION_NAME, text, true)))
    }

    /// Drop all accumulated state; the consolidator is immediately
    /// reusable for an independent conversion run.
    pub fn reset(&mut self) {
        self.pre_provided.clear();
        self.system_users.clear();
        self.paths.clear();
        self.registrations.clear();
    }
}

/// Append `set ACL for <user> ... end`, or nothing when there are no
/// entries.
fn append_acl_block(script: &mut String, user: &str, entries: &[AclEntry]) {
    if entries.is_empty() {
        return;
    }
    script.push_str(&format!("set ACL for {}\n", user));
    for entry in entries {
        script.push_str(&format!("{}\n", entry));
    }
    script.push_str("end\n");
}
