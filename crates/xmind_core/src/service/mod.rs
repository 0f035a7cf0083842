//! Document and sheet use-case layer.
//!
//! # Responsibility
//! - Compose topic trees and relationships into sheets, and sheets into a
//!   document.
//! - Keep callers working with ids instead of tree internals.

pub mod document;
pub mod sheet;
