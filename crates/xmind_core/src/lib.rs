//! In-memory document model for a mind-mapping editor.
//! This crate owns the topic-tree and cross-reference invariants.

pub mod config;
pub mod error;
pub mod extension;
pub mod logging;
pub mod model;
pub mod service;
pub mod tree;

pub use config::{ConfigError, DuplicateConfig, MindmapConfig};
pub use error::{ErrorKind, MindmapError, MindmapResult};
pub use extension::file_manager::{FileStatus, NoopFileManager, SheetFileManager};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::id::{IdAllocator, IdStrategy, RelationshipId, SheetId, TopicId};
pub use model::relationship::Relationship;
pub use model::style::{CustomText, Position, Shape};
pub use model::topic::Topic;
pub use service::document::Xmind;
pub use service::sheet::Sheet;
pub use tree::topic_tree::{InvariantViolation, TopicTree};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
