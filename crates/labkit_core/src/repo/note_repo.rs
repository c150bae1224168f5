//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the reconciled `notes` table.
//! - Keep writes compatible with unknown legacy schema variants.
//!
//! # Invariants
//! - Writes inspect the live column set and bind values only for columns
//!   that exist; legacy content column names receive the content value.
//! - Any other NOT NULL column without a default is filled with `''` so a
//!   legacy schema cannot fail an insert on a constraint.

use crate::db::schema::{table_columns, ColumnInfo, LEGACY_CONTENT_COLUMNS};
use crate::db::DbError;
use crate::model::note::Note;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT id, title, content, date FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The live table exposes no writable columns at all.
    NoWritableColumns,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NoWritableColumns => write!(f, "notes table has no writable columns"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NoWritableColumns => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Inserts one row and returns its store-assigned id.
    fn insert(&self, title: &str, content: &str, date: &str) -> RepoResult<i64>;
    /// Rewrites title/content/date for one row; returns affected row count.
    fn update(&self, id: i64, title: &str, content: &str, date: &str) -> RepoResult<usize>;
    /// Point lookup by id.
    fn get(&self, id: i64) -> RepoResult<Option<Note>>;
    /// All rows ordered by id descending (newest first).
    fn list(&self) -> RepoResult<Vec<Note>>;
    /// Removes one row by id; returns affected row count (0 or 1).
    fn delete(&self, id: i64) -> RepoResult<usize>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a reconciled connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert(&self, title: &str, content: &str, date: &str) -> RepoResult<i64> {
        let columns = table_columns(self.conn)?;
        let bindings = write_bindings(&columns, title, content, date, true);
        if bindings.is_empty() {
            return Err(RepoError::NoWritableColumns);
        }

        let names = bindings
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=bindings.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");

        self.conn.execute(
            &format!("INSERT INTO notes ({names}) VALUES ({placeholders});"),
            params_from_iter(bindings.into_iter().map(|(_, value)| value)),
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: i64, title: &str, content: &str, date: &str) -> RepoResult<usize> {
        let columns = table_columns(self.conn)?;
        let bindings = write_bindings(&columns, title, content, date, false);
        if bindings.is_empty() {
            return Err(RepoError::NoWritableColumns);
        }

        let assignments = bindings
            .iter()
            .enumerate()
            .map(|(index, (name, _))| format!("{name} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_placeholder = bindings.len() + 1;

        let mut values: Vec<Value> = bindings.into_iter().map(|(_, value)| value).collect();
        values.push(Value::Integer(id));

        let changed = self.conn.execute(
            &format!("UPDATE notes SET {assignments} WHERE id = ?{id_placeholder};"),
            params_from_iter(values),
        )?;

        Ok(changed)
    }

    fn get(&self, id: i64) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn delete(&self, id: i64) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", params![id])?;
        Ok(changed)
    }
}

/// Maps the live column set to `(column, value)` pairs for a write.
///
/// `fill_unknown_not_null` mirrors the insert path: extra NOT NULL columns
/// without defaults receive `''`; updates leave unrelated columns untouched.
fn write_bindings(
    columns: &[ColumnInfo],
    title: &str,
    content: &str,
    date: &str,
    fill_unknown_not_null: bool,
) -> Vec<(String, Value)> {
    let mut bindings = Vec::new();
    for column in columns {
        let lower = column.name.to_ascii_lowercase();
        let value = match lower.as_str() {
            "id" => continue,
            "title" => Value::Text(title.to_string()),
            "content" => Value::Text(content.to_string()),
            "date" => Value::Text(date.to_string()),
            name if LEGACY_CONTENT_COLUMNS.contains(&name) => Value::Text(content.to_string()),
            _ => {
                if fill_unknown_not_null && column.not_null && !column.has_default {
                    Value::Text(String::new())
                } else {
                    continue;
                }
            }
        };
        bindings.push((column.name.clone(), value));
    }
    bindings
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        date: row.get("date")?,
    })
}
