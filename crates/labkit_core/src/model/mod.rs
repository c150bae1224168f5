//! Domain model for the note store.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every note is identified by a store-assigned, strictly increasing id.

pub mod note;
