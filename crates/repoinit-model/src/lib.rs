//! Data model for repoinit script consolidation
//!
//! Provides the normalized repository path type, the ACL entry record,
//! and the repoinit operation model with its visitor trait.

pub mod acl;
pub mod ops;
pub mod path;

pub use acl::AclEntry;
pub use ops::{Operation, OperationVisitor};
pub use path::RepoPath;
