//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for notes.
//! - Isolate SQLite query details from the store facade.
//!
//! # Invariants
//! - Write paths populate only columns that exist on the live table.

pub mod note_repo;
