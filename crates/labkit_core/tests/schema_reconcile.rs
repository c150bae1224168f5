use labkit_core::db::schema::{has_column, reconcile_schema, table_columns};
use labkit_core::db::{open_db, open_db_in_memory};
use rusqlite::Connection;

#[test]
fn fresh_database_gets_the_target_table() {
    let conn = open_db_in_memory().unwrap();
    let columns = column_names(&conn);
    assert_eq!(columns, ["id", "title", "content", "date"]);
}

#[test]
fn reconciliation_is_idempotent_on_a_current_schema() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO notes (title, content, date) VALUES ('t', 'body', '01.01.2024');",
        [],
    )
    .unwrap();

    let columns_before = table_columns(&conn).unwrap();
    let rows_before = all_rows(&conn);

    reconcile_schema(&conn).unwrap();

    assert_eq!(table_columns(&conn).unwrap(), columns_before);
    assert_eq!(all_rows(&conn), rows_before);
}

#[test]
fn opening_same_database_twice_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO notes (title, content, date) VALUES ('t', 'body', '02.02.2024');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn legacy_description_column_is_copied_into_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    seed_legacy_db(
        &path,
        "CREATE TABLE notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL
        );
        INSERT INTO notes (description) VALUES ('hello');",
    );

    let conn = open_db(&path).unwrap();
    let columns = table_columns(&conn).unwrap();
    assert!(has_column(&columns, "title"));
    assert!(has_column(&columns, "content"));
    assert!(has_column(&columns, "date"));

    let (title, content, date): (String, String, String) = conn
        .query_row("SELECT title, content, date FROM notes;", [], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })
        .unwrap();
    assert_eq!(content, "hello");
    // Empty titles are backfilled from the migrated content.
    assert_eq!(title, "hello");
    assert_eq!(date, "");
}

#[test]
fn misspelled_legacy_column_is_recognized_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("misspelled.db");

    seed_legacy_db(
        &path,
        "CREATE TABLE notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            descriotion TEXT NOT NULL
        );
        INSERT INTO notes (title, descriotion) VALUES ('', 'old body');",
    );

    let conn = open_db(&path).unwrap();
    let content: String = conn
        .query_row("SELECT content FROM notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(content, "old body");
}

#[test]
fn legacy_copy_skips_rows_that_already_have_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.db");

    // v2-era schema with a date column but no content column.
    seed_legacy_db(
        &path,
        "CREATE TABLE notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL
        );
        INSERT INTO notes (title, description, date) VALUES ('keep', 'body', '03.03.2024');",
    );

    let conn = open_db(&path).unwrap();
    let (title, content, date): (String, String, String) = conn
        .query_row("SELECT title, content, date FROM notes;", [], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })
        .unwrap();
    assert_eq!(title, "keep");
    assert_eq!(content, "body");
    assert_eq!(date, "03.03.2024");
}

#[test]
fn long_backfilled_titles_are_truncated_with_ellipsis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("backfill.db");

    let long_content = "x".repeat(60);
    seed_legacy_db(
        &path,
        &format!(
            "CREATE TABLE notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                date TEXT NOT NULL
            );
            INSERT INTO notes (title, content, date) VALUES ('', '{long_content}', '');"
        ),
    );

    let conn = open_db(&path).unwrap();
    let title: String = conn
        .query_row("SELECT title FROM notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(title, format!("{}...", "x".repeat(50)));
}

fn seed_legacy_db(path: &std::path::Path, sql: &str) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(sql).unwrap();
    drop(conn);
}

fn column_names(conn: &Connection) -> Vec<String> {
    table_columns(conn)
        .unwrap()
        .into_iter()
        .map(|column| column.name)
        .collect()
}

fn all_rows(conn: &Connection) -> Vec<(i64, String, String, String)> {
    let mut stmt = conn
        .prepare("SELECT id, title, content, date FROM notes ORDER BY id;")
        .unwrap();
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .unwrap();
    rows.map(|row| row.unwrap()).collect()
}
