//! Arena-backed topic tree for one sheet.
//!
//! # Responsibility
//! - Store every topic of a sheet keyed by id.
//! - Apply structural edits (create, delete, duplicate, reparent, float).
//!
//! # Invariants
//! - Each topic is owned by exactly one slot: the root slot, the floating
//!   list, or the child list of exactly one parent.
//! - `topic.parent == Some(p)` iff `topic.id` appears once in `p.children`.
//! - Floating topics and the root have no parent.
//! - Reparenting never makes a topic its own ancestor.

use crate::config::MindmapConfig;
use crate::error::{MindmapError, MindmapResult};
use crate::model::id::{IdAllocator, TopicId};
use crate::model::topic::Topic;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Structural inconsistency found by [`TopicTree::validate_invariants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Root id is not present in the arena.
    MissingRoot(TopicId),
    /// Root or floating topic carries a parent.
    TopLevelHasParent(TopicId),
    /// A child list names an id that is not in the arena.
    DanglingChild { parent: TopicId, child: TopicId },
    /// Child's back-reference disagrees with the list that owns it.
    ParentMismatch {
        child: TopicId,
        listed_under: TopicId,
        parent: Option<TopicId>,
    },
    /// Topic is reachable from more than one slot.
    DuplicateMembership(TopicId),
    /// Topic is in the arena but owned by no slot.
    Unreachable(TopicId),
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRoot(id) => write!(f, "root topic missing from arena: {id}"),
            Self::TopLevelHasParent(id) => write!(f, "top-level topic has a parent: {id}"),
            Self::DanglingChild { parent, child } => {
                write!(f, "topic {parent} lists missing child {child}")
            }
            Self::ParentMismatch {
                child,
                listed_under,
                parent,
            } => match parent {
                Some(parent) => write!(
                    f,
                    "topic {child} listed under {listed_under} but points to {parent}"
                ),
                None => write!(f, "topic {child} listed under {listed_under} but has no parent"),
            },
            Self::DuplicateMembership(id) => write!(f, "topic owned more than once: {id}"),
            Self::Unreachable(id) => write!(f, "topic owned by no slot: {id}"),
        }
    }
}

impl Error for InvariantViolation {}

/// Topic arena of one sheet: root slot, floating list and all descendants.
#[derive(Debug)]
pub struct TopicTree {
    topics: HashMap<TopicId, Topic>,
    root: TopicId,
    floating: Vec<TopicId>,
    ids: Arc<IdAllocator>,
    config: Arc<MindmapConfig>,
}

impl TopicTree {
    /// Creates a tree holding only a root titled `root_text`.
    pub fn new(
        root_text: impl Into<String>,
        ids: Arc<IdAllocator>,
        config: Arc<MindmapConfig>,
    ) -> Self {
        let root = Topic::new(ids.allocate(), root_text, &config.topic);
        let root_id = root.id();
        let mut topics = HashMap::new();
        topics.insert(root_id, root);
        Self {
            topics,
            root: root_id,
            floating: Vec::new(),
            ids,
            config,
        }
    }

    /// Builds the configured root with one child per configured main topic.
    ///
    /// Children appear in configuration order.
    pub fn create_root_topic_default(ids: Arc<IdAllocator>, config: Arc<MindmapConfig>) -> Self {
        let mut tree = Self::new(config.root_topic.name.clone(), ids, Arc::clone(&config));
        let root = tree.root;
        for name in &config.main_topics {
            tree.attach_new(root, name.clone());
        }
        tree
    }

    pub fn root_id(&self) -> TopicId {
        self.root
    }

    pub fn root(&self) -> &Topic {
        // Root is inserted at construction and never removed.
        &self.topics[&self.root]
    }

    pub fn get(&self, id: TopicId) -> Option<&Topic> {
        self.topics.get(&id)
    }

    pub fn get_mut(&mut self, id: TopicId) -> Option<&mut Topic> {
        self.topics.get_mut(&id)
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.topics.contains_key(&id)
    }

    /// Number of topics in the arena, root and floating subtrees included.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Floating topic ids in creation order.
    pub fn floating(&self) -> &[TopicId] {
        &self.floating
    }

    pub fn is_floating(&self, id: TopicId) -> bool {
        self.floating.contains(&id)
    }

    pub fn children_of(&self, id: TopicId) -> Option<&[TopicId]> {
        self.topics.get(&id).map(Topic::children)
    }

    /// Iterates every topic in the arena in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    /// Creates a child of `parent` with default style, appended last.
    pub fn create_sub_topic(
        &mut self,
        parent: TopicId,
        text: impl Into<String>,
    ) -> MindmapResult<TopicId> {
        if !self.contains(parent) {
            return Err(MindmapError::TopicNotFound(parent));
        }
        let id = self.attach_new(parent, text);
        debug!(
            "event=topic_create module=tree status=ok topic_id={} parent_id={}",
            id, parent
        );
        Ok(id)
    }

    /// Creates a parentless topic appended to the floating list.
    pub fn create_floating_topic(&mut self, text: impl Into<String>) -> TopicId {
        let topic = Topic::new(self.ids.allocate(), text, &self.config.topic);
        let id = topic.id();
        self.topics.insert(id, topic);
        self.floating.push(id);
        debug!(
            "event=floating_topic_create module=tree status=ok topic_id={} floating_count={}",
            id,
            self.floating.len()
        );
        id
    }

    /// Detaches direct child `child` from `parent` and drops it.
    ///
    /// Descendants of `child` are orphaned, not reattached anywhere. Nothing
    /// can reach an orphan in the arena once its owner is gone, so orphans
    /// are dropped along with `child`. Relationships pointing at any of them
    /// are left untouched and become dangling.
    ///
    /// Returns `false` (no-op) when `child` is not a direct child of
    /// `parent`.
    pub fn delete_sub_topic(&mut self, parent: TopicId, child: TopicId) -> bool {
        let detached = self
            .topics
            .get_mut(&parent)
            .is_some_and(|topic| topic.remove_child(child));
        if !detached {
            debug!(
                "event=topic_delete module=tree status=noop topic_id={} parent_id={}",
                child, parent
            );
            return false;
        }
        let removed = self.drop_subtree(child);
        debug!(
            "event=topic_delete module=tree status=ok topic_id={} parent_id={} removed={}",
            child, parent, removed
        );
        true
    }

    /// Removes floating topic `id` and its subtree. No-op when not floating.
    pub fn delete_floating_topic(&mut self, id: TopicId) -> bool {
        let Some(index) = self.floating.iter().position(|floating| *floating == id) else {
            debug!(
                "event=floating_topic_delete module=tree status=noop topic_id={}",
                id
            );
            return false;
        };
        self.floating.remove(index);
        let removed = self.drop_subtree(id);
        debug!(
            "event=floating_topic_delete module=tree status=ok topic_id={} removed={}",
            id, removed
        );
        true
    }

    /// Appends a sibling copy of direct child `child` under `parent`.
    ///
    /// The copy takes the source title plus the configured suffix. Style is
    /// copied only when the duplicate policy asks for it; children are never
    /// copied.
    pub fn duplicate_sub_topic(
        &mut self,
        parent: TopicId,
        child: TopicId,
    ) -> MindmapResult<TopicId> {
        let is_direct_child = self
            .topics
            .get(&parent)
            .is_some_and(|topic| topic.children().contains(&child));
        if !is_direct_child {
            return Err(MindmapError::TopicNotFound(child));
        }
        let source = self
            .topics
            .get(&child)
            .ok_or(MindmapError::TopicNotFound(child))?;

        let policy = &self.config.topic.duplicate;
        let mut copy = Topic::new(
            self.ids.allocate(),
            format!("{}{}", source.text, policy.text_suffix),
            &self.config.topic,
        );
        if policy.copy_style {
            copy.shape = source.shape.clone();
            copy.position = source.position;
            copy.custom_text = source.custom_text.clone();
            copy.custom_text.content = copy.text.clone();
        }

        let id = copy.id();
        self.insert_child(parent, copy);
        debug!(
            "event=topic_duplicate module=tree status=ok source_id={} topic_id={} parent_id={}",
            child, id, parent
        );
        Ok(id)
    }

    /// Moves `topic` from its current parent to the end of `new_parent`'s
    /// children.
    ///
    /// # Errors
    /// - `TopicNotFound` when either id does not resolve.
    /// - `CycleRejected` when `new_parent` is `topic` or one of its descendants.
    /// - `NoParent` when `topic` is a root or floating topic.
    pub fn change_parent_topic(
        &mut self,
        topic: TopicId,
        new_parent: TopicId,
    ) -> MindmapResult<()> {
        let current_parent = self
            .topics
            .get(&topic)
            .ok_or(MindmapError::TopicNotFound(topic))?
            .parent();
        if !self.contains(new_parent) {
            return Err(MindmapError::TopicNotFound(new_parent));
        }
        if self.is_ancestor_or_self(topic, new_parent) {
            debug!(
                "event=topic_reparent module=tree status=error reason=cycle topic_id={} parent_id={}",
                topic, new_parent
            );
            return Err(MindmapError::CycleRejected { topic, new_parent });
        }
        let current_parent = current_parent.ok_or(MindmapError::NoParent(topic))?;

        if let Some(parent) = self.topics.get_mut(&current_parent) {
            parent.remove_child(topic);
        }
        if let Some(parent) = self.topics.get_mut(&new_parent) {
            parent.push_child(topic);
        }
        if let Some(moved) = self.topics.get_mut(&topic) {
            moved.set_parent(Some(new_parent));
        }
        debug!(
            "event=topic_reparent module=tree status=ok topic_id={} from_parent_id={} parent_id={}",
            topic, current_parent, new_parent
        );
        Ok(())
    }

    /// Detaches a direct child of the root and appends it to the floating
    /// list.
    ///
    /// Only direct root children qualify; anything else is `TopicNotFound`.
    pub fn move_topic_to_floating_topic(&mut self, topic: TopicId) -> MindmapResult<()> {
        let root = self.root;
        let detached = self
            .topics
            .get_mut(&root)
            .is_some_and(|root_topic| root_topic.remove_child(topic));
        if !detached {
            return Err(MindmapError::TopicNotFound(topic));
        }
        if let Some(moved) = self.topics.get_mut(&topic) {
            moved.set_parent(None);
        }
        self.floating.push(topic);
        debug!(
            "event=topic_float module=tree status=ok topic_id={} floating_count={}",
            topic,
            self.floating.len()
        );
        Ok(())
    }

    /// Ancestor ids of `id`, nearest first. Empty for top-level topics.
    pub fn ancestors(&self, id: TopicId) -> Vec<TopicId> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut cursor = self.topics.get(&id).and_then(Topic::parent);
        while let Some(current) = cursor {
            if !visited.insert(current) {
                break;
            }
            chain.push(current);
            cursor = self.topics.get(&current).and_then(Topic::parent);
        }
        chain
    }

    /// Descendant ids of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: TopicId) -> Vec<TopicId> {
        let mut out = Vec::new();
        let mut stack: Vec<TopicId> = match self.topics.get(&id) {
            Some(topic) => topic.children().iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(topic) = self.topics.get(&current) {
                stack.extend(topic.children().iter().rev().copied());
            }
        }
        out
    }

    /// Whether `candidate` is `topic` itself or sits below it.
    pub fn is_ancestor_or_self(&self, topic: TopicId, candidate: TopicId) -> bool {
        candidate == topic || self.ancestors(candidate).contains(&topic)
    }

    /// Structural copy with a fresh id for every topic.
    ///
    /// Returns the copy and the old-to-new id mapping.
    pub fn deep_copy(&self) -> (Self, HashMap<TopicId, TopicId>) {
        let mut order = vec![self.root];
        order.extend(self.descendants(self.root));
        for floating in &self.floating {
            order.push(*floating);
            order.extend(self.descendants(*floating));
        }

        let mapping: HashMap<TopicId, TopicId> = order
            .iter()
            .map(|old| (*old, self.ids.allocate()))
            .collect();

        let mut topics = HashMap::with_capacity(order.len());
        for old in &order {
            let Some(source) = self.topics.get(old) else {
                continue;
            };
            let children = source
                .children()
                .iter()
                .filter_map(|child| mapping.get(child).copied())
                .collect();
            let parent = source.parent().and_then(|parent| mapping.get(&parent).copied());
            let new_id = mapping[old];
            topics.insert(new_id, source.remapped(new_id, parent, children));
        }

        let copy = Self {
            topics,
            root: mapping[&self.root],
            floating: self.floating.iter().map(|id| mapping[id]).collect(),
            ids: Arc::clone(&self.ids),
            config: Arc::clone(&self.config),
        };
        (copy, mapping)
    }

    /// Verifies the ownership invariants listed in the module docs.
    pub fn validate_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.contains(self.root) {
            return Err(InvariantViolation::MissingRoot(self.root));
        }

        let mut seen = HashSet::with_capacity(self.topics.len());
        for top in std::iter::once(self.root).chain(self.floating.iter().copied()) {
            if !seen.insert(top) {
                return Err(InvariantViolation::DuplicateMembership(top));
            }
            let topic = self
                .topics
                .get(&top)
                .ok_or(InvariantViolation::Unreachable(top))?;
            if topic.parent().is_some() {
                return Err(InvariantViolation::TopLevelHasParent(top));
            }

            let mut stack = vec![top];
            while let Some(parent) = stack.pop() {
                let Some(parent_topic) = self.topics.get(&parent) else {
                    continue;
                };
                for child in parent_topic.children() {
                    let child_topic =
                        self.topics
                            .get(child)
                            .ok_or(InvariantViolation::DanglingChild {
                                parent,
                                child: *child,
                            })?;
                    if child_topic.parent() != Some(parent) {
                        return Err(InvariantViolation::ParentMismatch {
                            child: *child,
                            listed_under: parent,
                            parent: child_topic.parent(),
                        });
                    }
                    if !seen.insert(*child) {
                        return Err(InvariantViolation::DuplicateMembership(*child));
                    }
                    stack.push(*child);
                }
            }
        }

        if let Some(orphan) = self.topics.keys().find(|id| !seen.contains(*id)) {
            return Err(InvariantViolation::Unreachable(*orphan));
        }
        Ok(())
    }

    fn attach_new(&mut self, parent: TopicId, text: impl Into<String>) -> TopicId {
        let topic = Topic::new(self.ids.allocate(), text, &self.config.topic);
        let id = topic.id();
        self.insert_child(parent, topic);
        id
    }

    fn insert_child(&mut self, parent: TopicId, mut topic: Topic) {
        let id = topic.id();
        topic.set_parent(Some(parent));
        self.topics.insert(id, topic);
        if let Some(parent_topic) = self.topics.get_mut(&parent) {
            parent_topic.push_child(id);
        }
    }

    /// Removes `id` and every descendant from the arena. Returns the count.
    fn drop_subtree(&mut self, id: TopicId) -> usize {
        let mut doomed = self.descendants(id);
        doomed.push(id);
        doomed
            .into_iter()
            .filter(|topic| self.topics.remove(topic).is_some())
            .count()
    }
}
