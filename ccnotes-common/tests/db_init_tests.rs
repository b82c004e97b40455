//! Tests for database initialization
//!
//! Covers automatic database creation, idempotent schema creation, and the
//! shape of the note/series/speaker tables.

use ccnotes_common::db::{init_database, init_memory_database, schema_version, SCHEMA_VERSION};
use tempfile::TempDir;

async fn table_names(pool: &sqlx::SqlitePool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .expect("Should list tables")
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("sub").join("ccnotes.db");

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());

    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("ccnotes.db");

    let pool1 = init_database(&db_path).await.expect("First open");
    sqlx::query("INSERT INTO series (title, created_at) VALUES ('Kept', '2020-01-01T00:00:00Z')")
        .execute(&pool1)
        .await
        .unwrap();
    pool1.close().await;

    // Second open re-runs schema creation without losing data
    let pool2 = init_database(&db_path).await.expect("Second open");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM series")
        .fetch_one(&pool2)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_schema_tables_created() {
    let pool = init_memory_database().await.unwrap();

    let tables = table_names(&pool).await;
    for expected in ["note", "schema_version", "series", "speaker"] {
        assert!(tables.iter().any(|t| t == expected), "Missing table: {}", expected);
    }
}

#[tokio::test]
async fn test_schema_version_recorded_once() {
    let pool = init_memory_database().await.unwrap();
    ccnotes_common::db::create_schema(&pool).await.unwrap();

    assert_eq!(schema_version(&pool).await.unwrap(), Some(SCHEMA_VERSION));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_version")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_note_table_has_no_foreign_keys() {
    let pool = init_memory_database().await.unwrap();

    let fks: Vec<(i64,)> = sqlx::query_as("SELECT id FROM pragma_foreign_key_list('note')")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert!(fks.is_empty(), "note must tolerate dangling references");
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let pool = init_memory_database().await.unwrap();

    let first = sqlx::query("INSERT INTO speaker (name, created_at) VALUES ('A', '2020-01-01T00:00:00Z')")
        .execute(&pool)
        .await
        .unwrap()
        .last_insert_rowid();
    sqlx::query("DELETE FROM speaker WHERE id = ?")
        .bind(first)
        .execute(&pool)
        .await
        .unwrap();
    let second = sqlx::query("INSERT INTO speaker (name, created_at) VALUES ('B', '2020-01-01T00:00:00Z')")
        .execute(&pool)
        .await
        .unwrap()
        .last_insert_rowid();

    assert!(second > first);
}
