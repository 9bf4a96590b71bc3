use rusqlite::Connection;
use std::path::Path;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    publisher_id TEXT,
    name TEXT NOT NULL,
    platform TEXT NOT NULL,
    store_id TEXT,
    bundle_id TEXT,
    app_version TEXT,
    is_published BOOLEAN NOT NULL DEFAULT 0,
    release_date TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- A game is identified per platform by its bundle id, or by its name when it has none
CREATE UNIQUE INDEX IF NOT EXISTS idx_games_identity ON games(platform, COALESCE(bundle_id, name));

CREATE INDEX IF NOT EXISTS idx_games_name ON games(name);
"#;

/// Creates the games table if it doesn't exist. Safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Opens or creates a games database at the given path.
pub fn open_database(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Opens an in-memory database with the schema in place. Used by tests.
pub fn open_memory() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}
