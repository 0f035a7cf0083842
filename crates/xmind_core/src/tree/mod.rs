//! Topic storage for one sheet.
//!
//! # Responsibility
//! - Keep parent/child links as id relationships resolved through an arena.
//! - Own the single place where topic ownership is rewritten.

pub mod topic_tree;
