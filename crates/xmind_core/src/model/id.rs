//! Identifier allocation for topics, sheets and relationships.
//!
//! # Responsibility
//! - Hand out document-unique identifiers without process-wide hidden state.
//! - Support a deterministic sequential strategy and a random one.
//!
//! # Invariants
//! - An allocator never returns the same identifier twice.
//! - Identifiers are never reused after the entity they named is deleted.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Stable identifier of one topic.
pub type TopicId = Uuid;

/// Stable identifier of one sheet.
pub type SheetId = Uuid;

/// Stable identifier of one relationship.
pub type RelationshipId = Uuid;

/// How an [`IdAllocator`] produces identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Strictly increasing counter encoded as a UUID (`00000000-...-0001`).
    #[default]
    Sequential,
    /// Random v4 UUIDs.
    Random,
}

/// Identifier source owned by one document and shared with its sheets.
///
/// The counter is atomic so a document can be handed to another thread by
/// its embedder; mutation itself is still expected to be single-writer.
#[derive(Debug)]
pub struct IdAllocator {
    strategy: IdStrategy,
    issued: AtomicU64,
}

impl IdAllocator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            issued: AtomicU64::new(0),
        }
    }

    pub fn sequential() -> Self {
        Self::new(IdStrategy::Sequential)
    }

    pub fn random() -> Self {
        Self::new(IdStrategy::Random)
    }

    /// Returns a fresh identifier.
    pub fn allocate(&self) -> Uuid {
        let ordinal = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        match self.strategy {
            IdStrategy::Sequential => Uuid::from_u128(u128::from(ordinal)),
            IdStrategy::Random => Uuid::new_v4(),
        }
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::sequential()
    }
}
