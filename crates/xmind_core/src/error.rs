//! Error types for structural mind map operations.
//!
//! # Invariants
//! - Tolerant deletes never produce these errors; absence is a no-op there.
//! - Value-producing lookups fail with a typed error instead of a sentinel.

use crate::model::id::{RelationshipId, SheetId, TopicId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by sheet, tree and document operations.
pub type MindmapResult<T> = Result<T, MindmapError>;

/// Coarse classification of [`MindmapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    NoParent,
    CycleRejected,
    EmptyDocument,
}

/// Errors from topic tree, sheet and document operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MindmapError {
    /// Topic id does not resolve in the sheet, or is not where the
    /// operation requires it (e.g. not a direct child of the root).
    TopicNotFound(TopicId),
    /// Sheet id does not resolve in the document.
    SheetNotFound(SheetId),
    /// Relationship id does not resolve in the sheet.
    RelationshipNotFound(RelationshipId),
    /// Topic is a root or floating topic and has no parent to detach from.
    NoParent(TopicId),
    /// Reparenting would make `topic` its own ancestor.
    CycleRejected {
        topic: TopicId,
        new_parent: TopicId,
    },
    /// Document has no sheets left.
    EmptyDocument,
}

impl MindmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TopicNotFound(_) | Self::SheetNotFound(_) | Self::RelationshipNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::NoParent(_) => ErrorKind::NoParent,
            Self::CycleRejected { .. } => ErrorKind::CycleRejected,
            Self::EmptyDocument => ErrorKind::EmptyDocument,
        }
    }
}

impl Display for MindmapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopicNotFound(id) => write!(f, "topic not found: {id}"),
            Self::SheetNotFound(id) => write!(f, "sheet not found: {id}"),
            Self::RelationshipNotFound(id) => write!(f, "relationship not found: {id}"),
            Self::NoParent(id) => write!(f, "topic has no parent: {id}"),
            Self::CycleRejected { topic, new_parent } => write!(
                f,
                "reparent would create cycle: topic {topic} under parent {new_parent}"
            ),
            Self::EmptyDocument => write!(f, "document has no sheets"),
        }
    }
}

impl Error for MindmapError {}
