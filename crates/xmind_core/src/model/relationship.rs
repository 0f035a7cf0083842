//! Named association between two topics, independent of tree structure.
//!
//! Endpoints are stored by id only. Whether they still resolve is the
//! caller's concern; see `Sheet::dangling_relationships`.

use crate::model::id::{RelationshipId, TopicId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    id: RelationshipId,
    pub name: String,
    from_topic_id: TopicId,
    to_topic_id: TopicId,
}

impl Relationship {
    pub(crate) fn new(
        id: RelationshipId,
        name: impl Into<String>,
        from_topic_id: TopicId,
        to_topic_id: TopicId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            from_topic_id,
            to_topic_id,
        }
    }

    pub fn id(&self) -> RelationshipId {
        self.id
    }

    pub fn from_topic_id(&self) -> TopicId {
        self.from_topic_id
    }

    pub fn to_topic_id(&self) -> TopicId {
        self.to_topic_id
    }

    /// Whether `topic_id` is either endpoint.
    pub fn touches(&self, topic_id: TopicId) -> bool {
        self.from_topic_id == topic_id || self.to_topic_id == topic_id
    }

    pub fn rename_relationship(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Copy under a new identity with endpoints passed through `remap`.
    pub(crate) fn remapped(
        &self,
        id: RelationshipId,
        remap: impl Fn(TopicId) -> TopicId,
    ) -> Self {
        Self {
            id,
            name: self.name.clone(),
            from_topic_id: remap(self.from_topic_id),
            to_topic_id: remap(self.to_topic_id),
        }
    }
}
