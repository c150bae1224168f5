//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record.
//! - Derive the list title from the note content.
//!
//! # Invariants
//! - `title` is the content truncated to 50 characters, with `...` appended
//!   when the content is longer.
//! - `date` is formatted `DD.MM.YYYY`.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Maximum number of content characters carried into the derived title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned row id, strictly increasing.
    pub id: i64,
    /// List title derived from `content`.
    pub title: String,
    pub content: String,
    /// Creation or last-update date, `DD.MM.YYYY`.
    pub date: String,
}

/// Derives a note title by truncating the content to 50 characters.
///
/// Truncation is character-based, not byte-based, so multi-byte text keeps
/// the same visible length as the original app.
pub fn derive_title(content: &str) -> String {
    if content.chars().count() > TITLE_MAX_CHARS {
        let truncated: String = content.chars().take(TITLE_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        content.to_string()
    }
}

/// Formats the current local date as `DD.MM.YYYY`.
pub fn current_date_string() -> String {
    Local::now().format("%d.%m.%Y").to_string()
}
