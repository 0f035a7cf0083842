//! Topic node model.
//!
//! # Responsibility
//! - Hold the title and presentation attributes of one mind map node.
//! - Expose pure style/position setters.
//!
//! # Invariants
//! - `parent` and `children` are only written by the owning topic tree, so
//!   callers holding `&mut Topic` cannot break ownership bookkeeping.
//! - Style setters never change structure.

use crate::config::TopicConfig;
use crate::model::id::TopicId;
use crate::model::style::{CustomText, Position, Shape};
use serde::Serialize;

/// One node of a sheet's topic tree.
/// Serialize-only: structure is never rebuilt from outside the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    id: TopicId,
    /// Topic title.
    pub text: String,
    pub shape: Shape,
    pub custom_text: CustomText,
    pub position: Position,
    /// Structural parent. `None` for a sheet root or a floating topic.
    parent: Option<TopicId>,
    /// Owned children in display order.
    children: Vec<TopicId>,
}

impl Topic {
    /// Creates a detached topic with configured default style.
    pub(crate) fn new(id: TopicId, text: impl Into<String>, config: &TopicConfig) -> Self {
        let text = text.into();
        Self {
            id,
            custom_text: CustomText::from_config(text.clone(), &config.default_text),
            text,
            shape: Shape::from(&config.default_shape),
            position: Position::from(&config.default_position),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> TopicId {
        self.id
    }

    pub fn parent(&self) -> Option<TopicId> {
        self.parent
    }

    /// Child ids in display order.
    pub fn children(&self) -> &[TopicId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn move_to_new_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Replaces the title and the rendered label content together.
    pub fn update_text_content(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.custom_text.update_content(text.clone());
        self.text = text;
    }

    pub fn update_text_color(&mut self, color: impl Into<String>) {
        self.custom_text.update_text_color(color);
    }

    pub fn update_text_style(&mut self, style: impl Into<String>) {
        self.custom_text.update_font_style(style);
    }

    pub fn update_text_size(&mut self, size: f64) {
        self.custom_text.update_font_size(size);
    }

    pub fn update_font_family(&mut self, family: impl Into<String>) {
        self.custom_text.update_font_family(family);
    }

    pub fn change_shape_color(&mut self, color: impl Into<String>) {
        self.shape.update_fill_color(color);
    }

    pub fn change_shape_length(&mut self, length: f64) {
        self.shape.update_length(length);
    }

    pub fn change_shape_border(&mut self, border: impl Into<String>) {
        self.shape.update_border(border);
    }

    pub(crate) fn set_parent(&mut self, parent: Option<TopicId>) {
        self.parent = parent;
    }

    pub(crate) fn push_child(&mut self, child: TopicId) {
        self.children.push(child);
    }

    /// Removes `child` from the child list. Returns whether it was present.
    pub(crate) fn remove_child(&mut self, child: TopicId) -> bool {
        let before = self.children.len();
        self.children.retain(|id| *id != child);
        self.children.len() != before
    }

    /// Copy of this topic under a new identity with remapped structure.
    pub(crate) fn remapped(
        &self,
        id: TopicId,
        parent: Option<TopicId>,
        children: Vec<TopicId>,
    ) -> Self {
        Self {
            id,
            text: self.text.clone(),
            shape: self.shape.clone(),
            custom_text: self.custom_text.clone(),
            position: self.position,
            parent,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Topic;
    use crate::config::TopicConfig;
    use crate::model::style::Position;
    use uuid::Uuid;

    fn topic() -> Topic {
        Topic::new(Uuid::from_u128(7), "Idea", &TopicConfig::default())
    }

    #[test]
    fn new_topic_uses_configured_defaults() {
        let topic = topic();
        assert_eq!(topic.text, "Idea");
        assert_eq!(topic.custom_text.content, "Idea");
        assert_eq!(topic.custom_text.font_size, 12.0);
        assert_eq!(topic.shape.fill_color, "white");
        assert_eq!(topic.shape.length, 100.0);
        assert_eq!(topic.position, Position::new(0.0, 0.0));
        assert_eq!(topic.parent(), None);
        assert!(!topic.has_children());
    }

    #[test]
    fn setters_update_style_only() {
        let mut topic = topic();
        topic.move_to_new_position(Position::new(100.0, 100.0));
        topic.update_text_content("Main topic");
        topic.update_text_color("red");
        topic.update_text_style("bold");
        topic.update_text_size(20.0);
        topic.update_font_family("Georgia");
        topic.change_shape_color("red");
        topic.change_shape_length(140.0);
        topic.change_shape_border("dotted");

        assert_eq!(topic.position.x, 100.0);
        assert_eq!(topic.position.y, 100.0);
        assert_eq!(topic.text, "Main topic");
        assert_eq!(topic.custom_text.content, "Main topic");
        assert_eq!(topic.custom_text.text_color, "red");
        assert_eq!(topic.custom_text.font_style, "bold");
        assert_eq!(topic.custom_text.font_size, 20.0);
        assert_eq!(topic.custom_text.font_family, "Georgia");
        assert_eq!(topic.shape.fill_color, "red");
        assert_eq!(topic.shape.length, 140.0);
        assert_eq!(topic.shape.border, "dotted");
        assert_eq!(topic.parent(), None);
        assert!(topic.children().is_empty());
    }

    #[test]
    fn serializes_structure_as_ids() {
        let mut topic = topic();
        topic.push_child(Uuid::from_u128(8));
        topic.set_parent(Some(Uuid::from_u128(1)));

        let json = serde_json::to_value(&topic).expect("topic serializes");
        assert_eq!(json["id"], Uuid::from_u128(7).to_string());
        assert_eq!(json["parent"], Uuid::from_u128(1).to_string());
        assert_eq!(json["children"][0], Uuid::from_u128(8).to_string());
        assert_eq!(json["custom_text"]["font_family"], "Arial");
    }
}
