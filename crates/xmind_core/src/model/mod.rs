//! Mind map value types.
//!
//! # Responsibility
//! - Define the node, style and relationship records shared by sheets.
//! - Define identifier types and their allocator.
//!
//! # Invariants
//! - Every topic, sheet and relationship is identified by a document-unique id.
//! - Structural fields of `Topic` are written only by `tree::TopicTree`.

pub mod id;
pub mod relationship;
pub mod style;
pub mod topic;
