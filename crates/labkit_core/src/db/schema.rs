//! Note-table schema reconciler.
//!
//! # Responsibility
//! - Register additive migration steps in deterministic order.
//! - Converge the three historical note schemas to the target shape without
//!   destroying existing rows.
//!
//! # Invariants
//! - Every step is guarded by a column-existence predicate and idempotent.
//! - Running the reconciler on an already-current schema changes nothing.

use crate::db::{DbError, DbResult};
use log::{info, warn};
use rusqlite::Connection;

pub const NOTES_TABLE: &str = "notes";

/// Column names older variants of the lab used instead of `content`
/// (including a known misspelling).
pub const LEGACY_CONTENT_COLUMNS: &[&str] = &["description", "descriotion"];

const CREATE_NOTES_SQL: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    date TEXT NOT NULL
);";

/// One live column of the `notes` table as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub not_null: bool,
    pub has_default: bool,
}

struct MigrationStep {
    name: &'static str,
    needed: fn(&[ColumnInfo]) -> bool,
    apply: fn(&Connection, &[ColumnInfo]) -> rusqlite::Result<()>,
}

const STEPS: &[MigrationStep] = &[
    MigrationStep {
        name: "add_title",
        needed: |columns| !has_column(columns, "title"),
        apply: |conn, _| {
            conn.execute_batch("ALTER TABLE notes ADD COLUMN title TEXT NOT NULL DEFAULT '';")
        },
    },
    MigrationStep {
        name: "add_content",
        needed: |columns| !has_column(columns, "content"),
        apply: |conn, columns| {
            conn.execute_batch("ALTER TABLE notes ADD COLUMN content TEXT NOT NULL DEFAULT '';")?;
            if let Some(legacy) = legacy_content_column(columns) {
                warn!(
                    "event=schema_reconcile module=db status=legacy_copy from={legacy} to=content"
                );
                conn.execute(
                    &format!("UPDATE notes SET content = {legacy} WHERE content = '';"),
                    [],
                )?;
            }
            Ok(())
        },
    },
    MigrationStep {
        name: "add_date",
        needed: |columns| !has_column(columns, "date"),
        apply: |conn, _| {
            conn.execute_batch("ALTER TABLE notes ADD COLUMN date TEXT NOT NULL DEFAULT '';")
        },
    },
    MigrationStep {
        name: "backfill_empty_titles",
        needed: |columns| has_column(columns, "title") && has_column(columns, "content"),
        apply: |conn, _| {
            conn.execute(
                "UPDATE notes SET title =
                    CASE WHEN length(content) > 50
                         THEN substr(content, 1, 50) || '...'
                         ELSE content
                    END
                 WHERE title = '';",
                [],
            )?;
            Ok(())
        },
    },
];

/// Converges the live `notes` schema to the target shape.
///
/// Safe to run on every open; steps whose guard does not fire are skipped.
pub fn reconcile_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_NOTES_SQL)
        .map_err(|source| DbError::Migration {
            step: "create_table",
            source,
        })?;

    for step in STEPS {
        let columns = table_columns(conn)?;
        if !(step.needed)(&columns) {
            continue;
        }
        info!(
            "event=schema_reconcile module=db status=apply step={}",
            step.name
        );
        (step.apply)(conn, &columns).map_err(|source| DbError::Migration {
            step: step.name,
            source,
        })?;
    }

    Ok(())
}

/// Reads the actual column set of the live `notes` table.
pub fn table_columns(conn: &Connection) -> DbResult<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({NOTES_TABLE});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(ColumnInfo {
            name: row.get::<_, String>("name")?,
            not_null: row.get::<_, i64>("notnull")? == 1,
            has_default: row.get::<_, Option<String>>("dflt_value")?.is_some(),
        });
    }
    Ok(columns)
}

/// Case-insensitive column presence check, matching how the legacy schemas
/// were probed.
pub fn has_column(columns: &[ColumnInfo], name: &str) -> bool {
    columns
        .iter()
        .any(|column| column.name.eq_ignore_ascii_case(name))
}

/// Returns the live name of a recognized legacy content column, if any.
pub fn legacy_content_column(columns: &[ColumnInfo]) -> Option<&str> {
    columns
        .iter()
        .find(|column| {
            LEGACY_CONTENT_COLUMNS
                .iter()
                .any(|legacy| column.name.eq_ignore_ascii_case(legacy))
        })
        .map(|column| column.name.as_str())
}
