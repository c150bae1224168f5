//! Core domain logic for the labkit lab-application suite.
//! This crate is the single source of truth for business invariants.

pub mod calc;
pub mod db;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod repo;
pub mod service;
pub mod shopping;
pub mod taxi;

pub use calc::engine::{CalcState, Key, Operator, ERROR_DIV_ZERO, ERROR_NEGATIVE_SQRT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{current_date_string, derive_title, Note};
pub use prefs::{KeyValueStore, MemoryKeyValueStore};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_store::NoteStore;
pub use shopping::{checkout, Checkout, Product};
pub use taxi::{Route, RouteAddress, UserProfile};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
