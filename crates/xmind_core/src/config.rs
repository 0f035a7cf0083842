//! Injected defaults for sheet population and new entities.
//!
//! # Responsibility
//! - Carry every default the model applies (names, colors, fonts, layout).
//! - Parse and validate configuration supplied by the embedder.
//!
//! # Invariants
//! - Every field has a default, so partial JSON documents are accepted.
//! - A validated config never yields blank names or non-positive sizes.

use crate::model::id::IdStrategy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Top-level mind map configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindmapConfig {
    pub sheet: SheetConfig,
    /// Titles of the children created under every new root, in order.
    pub main_topics: Vec<String>,
    pub root_topic: RootTopicConfig,
    pub topic: TopicConfig,
    pub relationship: RelationshipConfig,
    /// Identifier allocation strategy for documents built from this config.
    pub ids: IdStrategy,
}

impl Default for MindmapConfig {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            main_topics: (1..=4).map(|index| format!("Main Topic {index}")).collect(),
            root_topic: RootTopicConfig::default(),
            topic: TopicConfig::default(),
            relationship: RelationshipConfig::default(),
            ids: IdStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub background_color: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootTopicConfig {
    pub name: String,
}

impl Default for RootTopicConfig {
    fn default() -> Self {
        Self {
            name: "Central Topic".to_string(),
        }
    }
}

/// Style applied to every newly created topic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    pub default_shape: ShapeConfig,
    pub default_text: TextConfig,
    pub default_position: PositionConfig,
    pub duplicate: DuplicateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub fill_color: String,
    pub border: String,
    pub length: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            fill_color: "white".to_string(),
            border: "black".to_string(),
            length: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub font_size: f64,
    pub font_family: String,
    pub font_style: String,
    pub text_color: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_family: "Arial".to_string(),
            font_style: "normal".to_string(),
            text_color: "black".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    pub x: f64,
    pub y: f64,
}

/// Policy for `duplicate_sub_topic`.
///
/// The defaults produce a sibling with the same title and default style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateConfig {
    /// Copy shape, text style and position from the source topic.
    pub copy_style: bool,
    /// Appended verbatim to the duplicated title, e.g. `" - Copy"`.
    pub text_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipConfig {
    pub name: String,
}

impl Default for RelationshipConfig {
    fn default() -> Self {
        Self {
            name: "relationship".to_string(),
        }
    }
}

impl MindmapConfig {
    /// Parses a JSON document and validates the result.
    ///
    /// Missing fields fall back to defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value-level constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_not_blank("root_topic.name", &self.root_topic.name)?;
        ensure_not_blank("sheet.background_color", &self.sheet.background_color)?;
        ensure_not_blank("relationship.name", &self.relationship.name)?;
        ensure_not_blank(
            "topic.default_text.font_family",
            &self.topic.default_text.font_family,
        )?;
        if let Some(index) = self
            .main_topics
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::BlankMainTopic(index));
        }
        ensure_positive("topic.default_text.font_size", self.topic.default_text.font_size)?;
        ensure_positive("topic.default_shape.length", self.topic.default_shape.length)?;
        Ok(())
    }
}

fn ensure_not_blank(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::BlankField(field));
    }
    Ok(())
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

/// Configuration parse/validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Input is not valid JSON for the config shape.
    Parse(String),
    /// A required text field is empty after trim.
    BlankField(&'static str),
    /// `main_topics[index]` is empty after trim.
    BlankMainTopic(usize),
    /// A size field is zero, negative or not finite.
    NonPositive { field: &'static str, value: f64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid mind map config: {message}"),
            Self::BlankField(field) => write!(f, "config field `{field}` must not be blank"),
            Self::BlankMainTopic(index) => {
                write!(f, "config field `main_topics[{index}]` must not be blank")
            }
            Self::NonPositive { field, value } => {
                write!(f, "config field `{field}` must be positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, MindmapConfig};
    use crate::model::id::IdStrategy;

    #[test]
    fn defaults_match_stock_mind_map() {
        let config = MindmapConfig::default();
        assert_eq!(config.root_topic.name, "Central Topic");
        assert_eq!(
            config.main_topics,
            vec!["Main Topic 1", "Main Topic 2", "Main Topic 3", "Main Topic 4"]
        );
        assert_eq!(config.sheet.background_color, "white");
        assert_eq!(config.relationship.name, "relationship");
        assert_eq!(config.topic.default_text.font_family, "Arial");
        assert_eq!(config.ids, IdStrategy::Sequential);
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = MindmapConfig::from_json_str(
            r#"{ "main_topics": ["Goals", "Risks"], "ids": "random",
                 "topic": { "default_text": { "font_size": 16 } } }"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.main_topics, vec!["Goals", "Risks"]);
        assert_eq!(config.ids, IdStrategy::Random);
        assert_eq!(config.topic.default_text.font_size, 16.0);
        assert_eq!(config.topic.default_text.font_family, "Arial");
        assert_eq!(config.root_topic.name, "Central Topic");
    }

    #[test]
    fn rejects_blank_root_name() {
        let err = MindmapConfig::from_json_str(r#"{ "root_topic": { "name": "  " } }"#)
            .expect_err("blank root name must fail");
        assert_eq!(err, ConfigError::BlankField("root_topic.name"));
    }

    #[test]
    fn rejects_blank_main_topic_with_index() {
        let err = MindmapConfig::from_json_str(r#"{ "main_topics": ["A", ""] }"#)
            .expect_err("blank main topic must fail");
        assert_eq!(err, ConfigError::BlankMainTopic(1));
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let err = MindmapConfig::from_json_str(
            r#"{ "topic": { "default_shape": { "length": 0 } } }"#,
        )
        .expect_err("zero length must fail");
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "topic.default_shape.length",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = MindmapConfig::from_json_str("{ not json").expect_err("parse must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid mind map config"));
    }
}
