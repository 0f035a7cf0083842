//! Sheet: one mind map canvas.
//!
//! # Responsibility
//! - Own the topic tree, floating topics and relationships of one canvas.
//! - Resolve ids for relationship and floating-topic operations.
//! - Produce independent deep copies for sheet duplication.
//!
//! # Invariants
//! - A sheet always has a root topic.
//! - Relationship endpoints are checked by nobody after creation; deleting a
//!   topic never deletes relationships.
//! - A duplicated sheet shares no topic or relationship id with its source.

use crate::config::MindmapConfig;
use crate::error::{MindmapError, MindmapResult};
use crate::model::id::{IdAllocator, RelationshipId, SheetId, TopicId};
use crate::model::relationship::Relationship;
use crate::model::topic::Topic;
use crate::tree::topic_tree::{InvariantViolation, TopicTree};
use log::debug;
use std::sync::Arc;

/// Suffix appended to the name of a duplicated sheet.
pub const COPY_SUFFIX: &str = " - Copy";

#[derive(Debug)]
pub struct Sheet {
    id: SheetId,
    name: String,
    background_color: String,
    tree: TopicTree,
    relationships: Vec<Relationship>,
    ids: Arc<IdAllocator>,
    config: Arc<MindmapConfig>,
}

impl Sheet {
    /// Creates a sheet populated with the configured root and main topics.
    pub fn new(name: impl Into<String>, ids: Arc<IdAllocator>, config: Arc<MindmapConfig>) -> Self {
        let tree = TopicTree::create_root_topic_default(Arc::clone(&ids), Arc::clone(&config));
        let sheet = Self {
            id: ids.allocate(),
            name: name.into(),
            background_color: config.sheet.background_color.clone(),
            tree,
            relationships: Vec::new(),
            ids,
            config,
        };
        debug!(
            "event=sheet_create module=sheet status=ok sheet_id={} main_topics={}",
            sheet.id,
            sheet.root_topic().children().len()
        );
        sheet
    }

    pub fn id(&self) -> SheetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn rename_sheet(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn change_background_color(&mut self, color: impl Into<String>) {
        self.background_color = color.into();
    }

    /// Read access to the underlying arena.
    pub fn tree(&self) -> &TopicTree {
        &self.tree
    }

    pub fn root_topic(&self) -> &Topic {
        self.tree.root()
    }

    pub fn topic(&self, id: TopicId) -> Option<&Topic> {
        self.tree.get(id)
    }

    /// Mutable access for style setters. Structure stays tree-managed.
    pub fn topic_mut(&mut self, id: TopicId) -> Option<&mut Topic> {
        self.tree.get_mut(id)
    }

    /// Floating topics in creation order.
    pub fn floating_topics(&self) -> impl Iterator<Item = &Topic> {
        self.tree
            .floating()
            .iter()
            .filter_map(|id| self.tree.get(*id))
    }

    pub fn create_sub_topic(
        &mut self,
        parent: TopicId,
        text: impl Into<String>,
    ) -> MindmapResult<TopicId> {
        self.tree.create_sub_topic(parent, text)
    }

    /// Tolerant delete; see [`TopicTree::delete_sub_topic`].
    pub fn delete_sub_topic(&mut self, parent: TopicId, child: TopicId) -> bool {
        self.tree.delete_sub_topic(parent, child)
    }

    pub fn duplicate_sub_topic(
        &mut self,
        parent: TopicId,
        child: TopicId,
    ) -> MindmapResult<TopicId> {
        self.tree.duplicate_sub_topic(parent, child)
    }

    pub fn change_parent_topic(&mut self, topic: TopicId, new_parent: TopicId) -> MindmapResult<()> {
        self.tree.change_parent_topic(topic, new_parent)
    }

    pub fn create_floating_topic(&mut self, text: impl Into<String>) -> TopicId {
        self.tree.create_floating_topic(text)
    }

    pub fn delete_floating_topic(&mut self, id: TopicId) -> bool {
        self.tree.delete_floating_topic(id)
    }

    pub fn move_topic_to_floating_topic(&mut self, topic: TopicId) -> MindmapResult<()> {
        self.tree.move_topic_to_floating_topic(topic)
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        self.relationships
            .iter()
            .find(|relationship| relationship.id() == id)
    }

    /// Records a relationship between two topic ids and returns its id.
    ///
    /// Endpoints are not validated.
    pub fn create_relationship(&mut self, from: TopicId, to: TopicId) -> RelationshipId {
        let relationship = Relationship::new(
            self.ids.allocate(),
            self.config.relationship.name.clone(),
            from,
            to,
        );
        let id = relationship.id();
        self.relationships.push(relationship);
        debug!(
            "event=relationship_create module=sheet status=ok sheet_id={} relationship_id={} from_id={} to_id={}",
            self.id, id, from, to
        );
        id
    }

    /// Removes one relationship. Returns `false` when it does not exist.
    pub fn delete_relationship(&mut self, id: RelationshipId) -> bool {
        let before = self.relationships.len();
        self.relationships
            .retain(|relationship| relationship.id() != id);
        let removed = self.relationships.len() != before;
        debug!(
            "event=relationship_delete module=sheet status={} sheet_id={} relationship_id={}",
            if removed { "ok" } else { "noop" },
            self.id,
            id
        );
        removed
    }

    pub fn rename_relationship(
        &mut self,
        id: RelationshipId,
        name: impl Into<String>,
    ) -> MindmapResult<()> {
        let relationship = self
            .relationships
            .iter_mut()
            .find(|relationship| relationship.id() == id)
            .ok_or(MindmapError::RelationshipNotFound(id))?;
        relationship.rename_relationship(name);
        Ok(())
    }

    /// Relationships with at least one endpoint that no longer resolves.
    pub fn dangling_relationships(&self) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|relationship| {
                !self.tree.contains(relationship.from_topic_id())
                    || !self.tree.contains(relationship.to_topic_id())
            })
            .collect()
    }

    /// Checks topic ownership invariants of this sheet.
    pub fn validate_invariants(&self) -> Result<(), InvariantViolation> {
        self.tree.validate_invariants()
    }

    /// Deep copy named `"<name> - Copy"` with fresh ids throughout.
    ///
    /// Relationship endpoints are rewritten to the copied topics. Endpoints
    /// that were already dangling are kept as they are.
    pub fn duplicate(&self) -> Self {
        let (tree, mapping) = self.tree.deep_copy();
        let relationships = self
            .relationships
            .iter()
            .map(|relationship| {
                relationship.remapped(self.ids.allocate(), |old| {
                    mapping.get(&old).copied().unwrap_or(old)
                })
            })
            .collect();
        let copy = Self {
            id: self.ids.allocate(),
            name: format!("{}{}", self.name, COPY_SUFFIX),
            background_color: self.background_color.clone(),
            tree,
            relationships,
            ids: Arc::clone(&self.ids),
            config: Arc::clone(&self.config),
        };
        debug!(
            "event=sheet_duplicate module=sheet status=ok source_id={} sheet_id={} topics={} relationships={}",
            self.id,
            copy.id,
            copy.tree.len(),
            copy.relationships.len()
        );
        copy
    }
}
