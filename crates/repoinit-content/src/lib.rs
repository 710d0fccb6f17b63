//! Node-type resolution against materialized package content
//!
//! When a repoinit script declares `create path`, the node type to emit
//! depends on whether the conversion already materialized content at that
//! path. This crate probes extracted package content on disk and extracts
//! the declared primary type from `.content.xml` metadata.

pub mod error;
pub mod primary_type;
pub mod resolver;

pub use error::{Error, Result};
pub use primary_type::PrimaryTypeParser;
pub use resolver::{CONTENT_XML, DEFAULT_NODE_TYPE, NodeTypeResolver, PackageContentResolver};
