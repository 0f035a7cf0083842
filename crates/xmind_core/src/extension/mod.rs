//! Contracts for collaborators outside the core.
//!
//! Only the signal interface is defined here; format conversion is supplied
//! by the embedder.

pub mod file_manager;
