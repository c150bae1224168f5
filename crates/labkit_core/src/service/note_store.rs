//! Note store facade.
//!
//! # Responsibility
//! - Expose the screen-facing note operations over a repository.
//! - Represent write faults as sentinel return values plus a retained
//!   diagnostic, and read faults as empty results.
//!
//! # Invariants
//! - No operation panics or propagates a storage error to the caller.
//! - An empty insert title is derived from the content before writing.
//! - Update recomputes the title from the new content.

use crate::model::note::{derive_title, Note};
use crate::repo::note_repo::NoteRepository;
use log::{debug, error};

/// Screen-facing note store with in-band failure semantics.
///
/// Insert returns `-1` on failure, update/delete return `0`, reads return
/// empty results; the last write diagnostic is kept for the caller to
/// surface.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    last_error: Option<String>,
}

impl<R: NoteRepository> NoteStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            last_error: None,
        }
    }

    /// Diagnostic message from the most recent failed write, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Inserts one note and returns its id, or `-1` on failure.
    ///
    /// An empty `title` is derived from `content` using the 50-character
    /// truncation rule.
    pub fn insert_note(&mut self, title: &str, content: &str, date: &str) -> i64 {
        self.last_error = None;
        let title = if title.is_empty() {
            derive_title(content)
        } else {
            title.to_string()
        };

        match self.repo.insert(&title, content, date) {
            Ok(id) => {
                debug!("event=note_insert module=service status=ok id={id}");
                id
            }
            Err(err) => {
                error!("event=note_insert module=service status=error error={err}");
                self.last_error = Some(err.to_string());
                -1
            }
        }
    }

    /// Rewrites one note from new content, recomputing title and date.
    ///
    /// Returns the affected row count, `0` on failure or when `id` does not
    /// exist.
    pub fn update_note(&mut self, id: i64, content: &str, date: &str) -> usize {
        self.last_error = None;
        let title = derive_title(content);

        match self.repo.update(id, &title, content, date) {
            Ok(rows) => {
                debug!("event=note_update module=service status=ok id={id} rows={rows}");
                rows
            }
            Err(err) => {
                error!("event=note_update module=service status=error id={id} error={err}");
                self.last_error = Some(err.to_string());
                0
            }
        }
    }

    /// All notes, newest first. Returns an empty list on a read fault.
    pub fn get_all_notes(&self) -> Vec<Note> {
        match self.repo.list() {
            Ok(notes) => notes,
            Err(err) => {
                error!("event=note_list module=service status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Point lookup by id. Returns `None` on a read fault.
    pub fn get_note_by_id(&self, id: i64) -> Option<Note> {
        match self.repo.get(id) {
            Ok(note) => note,
            Err(err) => {
                error!("event=note_get module=service status=error id={id} error={err}");
                None
            }
        }
    }

    /// Removes one note by id; returns the affected row count (0 or 1).
    pub fn delete_note(&mut self, id: i64) -> usize {
        self.last_error = None;
        match self.repo.delete(id) {
            Ok(rows) => {
                debug!("event=note_delete module=service status=ok id={id} rows={rows}");
                rows
            }
            Err(err) => {
                error!("event=note_delete module=service status=error id={id} error={err}");
                self.last_error = Some(err.to_string());
                0
            }
        }
    }
}
