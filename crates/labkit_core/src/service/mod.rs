//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Convert storage faults into the in-band semantics screens rely on.

pub mod note_store;
