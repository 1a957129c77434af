use docdir_db::schema::{CURRENT_VERSION, SCHEMA_V1_SQL, create_schema, get_schema_version, migrate};
use docdir_db::{SchemaError, open_database, open_memory};
use tempfile::TempDir;

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn providers_table_has_expected_columns() {
    let conn = open_memory().unwrap();
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('providers')").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    for expected in [
        "id",
        "display_name",
        "profession",
        "region",
        "province",
        "suburb",
        "telephone",
        "address",
        "profile_picture_url",
    ] {
        assert!(columns.iter().any(|c| c == expected), "missing column {expected}");
    }
}

#[test]
fn migrates_version_one_database() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA_V1_SQL).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), 1);

    migrate(&conn, 1).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
    conn.execute(
        "INSERT INTO providers (display_name, profile_picture_url) VALUES ('Smith', 'a.png')",
        [],
    )
    .unwrap();
}

#[test]
fn newer_database_is_rejected() {
    let conn = open_memory().unwrap();
    let err = migrate(&conn, CURRENT_VERSION + 1).unwrap_err();
    assert!(matches!(err, SchemaError::VersionMismatch { .. }));
}

#[test]
fn open_database_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data").join("providers.db");
    {
        let conn = open_database(&path).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
    }
    assert!(path.exists());
    // Reopening an existing database keeps the schema.
    let conn = open_database(&path).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}
