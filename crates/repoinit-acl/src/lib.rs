//! ACL consolidation and repoinit script generation
//!
//! Accumulates the system users, hierarchical paths, and per-user ACL
//! entries discovered while converting a content package, and emits them
//! as one ordered repoinit script: paths first, then service users, then
//! the ACL blocks referencing both.

pub mod consolidator;
pub mod error;
pub mod extension;

pub use consolidator::AclConsolidator;
pub use error::{Error, Result};
pub use extension::{Extension, ExtensionKind, REPOINIT_EXTENSION_NAME};
