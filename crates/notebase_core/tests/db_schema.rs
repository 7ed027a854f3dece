use notebase_core::db::migrations::{apply_migrations, latest_version};
use notebase_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_creates_notes_table_and_stamps_user_version() {
    let conn = open_db_in_memory().unwrap();

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn reopening_an_existing_store_is_idempotent_and_keeps_data() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO notes (title, content) VALUES ('kept', 'data');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn apply_migrations_rejects_databases_from_the_future() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();

    let err = apply_migrations(&mut conn).expect_err("future schema must be rejected");
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 999,
            ..
        }
    ));
}

#[test]
fn title_and_content_are_not_nullable() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute("INSERT INTO notes (title) VALUES ('no content');", [])
        .expect_err("NOT NULL constraint should reject the row");
    assert!(err.to_string().contains("NOT NULL"));
}
