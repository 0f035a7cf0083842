//! Presentation attributes attached to every topic.
//!
//! These are plain value types: setters never touch tree structure.

use crate::config::{PositionConfig, ShapeConfig, TextConfig};
use serde::{Deserialize, Serialize};

/// Outline drawn around a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub fill_color: String,
    pub border: String,
    pub length: f64,
}

impl Shape {
    pub fn update_fill_color(&mut self, fill_color: impl Into<String>) {
        self.fill_color = fill_color.into();
    }

    pub fn update_border(&mut self, border: impl Into<String>) {
        self.border = border.into();
    }

    pub fn update_length(&mut self, length: f64) {
        self.length = length;
    }
}

impl From<&ShapeConfig> for Shape {
    fn from(value: &ShapeConfig) -> Self {
        Self {
            fill_color: value.fill_color.clone(),
            border: value.border.clone(),
            length: value.length,
        }
    }
}

/// Rendered label of a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomText {
    pub content: String,
    pub font_size: f64,
    pub font_family: String,
    pub font_style: String,
    pub text_color: String,
}

impl CustomText {
    /// Builds a label for `content` using configured font defaults.
    pub fn from_config(content: impl Into<String>, config: &TextConfig) -> Self {
        Self {
            content: content.into(),
            font_size: config.font_size,
            font_family: config.font_family.clone(),
            font_style: config.font_style.clone(),
            text_color: config.text_color.clone(),
        }
    }

    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn update_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    pub fn update_font_family(&mut self, font_family: impl Into<String>) {
        self.font_family = font_family.into();
    }

    pub fn update_font_style(&mut self, font_style: impl Into<String>) {
        self.font_style = font_style.into();
    }

    pub fn update_text_color(&mut self, text_color: impl Into<String>) {
        self.text_color = text_color.into();
    }
}

/// Canvas coordinates of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&PositionConfig> for Position {
    fn from(value: &PositionConfig) -> Self {
        Self::new(value.x, value.y)
    }
}
