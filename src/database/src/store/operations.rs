//! Synchronous game queries over a single SQLite connection.

use crate::StoreError;
use catalog::{Game, GameDraft, SearchFilter};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const GAME_COLUMNS: &str = "id, publisher_id, name, platform, store_id, bundle_id, app_version, \
                            is_published, release_date, created_at, updated_at";

const INSERT_GAME_SQL: &str = "INSERT INTO games \
    (publisher_id, name, platform, store_id, bundle_id, app_version, is_published, release_date) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

const INSERT_OR_IGNORE_GAME_SQL: &str = "INSERT OR IGNORE INTO games \
    (publisher_id, name, platform, store_id, bundle_id, app_version, is_published, release_date) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

fn game_from_row(row: &Row) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        publisher_id: row.get(1)?,
        name: row.get(2)?,
        platform: row.get(3)?,
        store_id: row.get(4)?,
        bundle_id: row.get(5)?,
        app_version: row.get(6)?,
        is_published: row.get(7)?,
        release_date: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

pub fn list_games(conn: &Connection) -> Result<Vec<Game>, StoreError> {
    let mut stmt = conn.prepare(&format!("SELECT {} FROM games ORDER BY id", GAME_COLUMNS))?;
    let games = stmt
        .query_map([], game_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(games)
}

pub fn find_game(conn: &Connection, id: i64) -> Result<Option<Game>, StoreError> {
    let game = conn
        .query_row(
            &format!("SELECT {} FROM games WHERE id = ?1", GAME_COLUMNS),
            params![id],
            game_from_row,
        )
        .optional()?;
    Ok(game)
}

pub fn count_games(conn: &Connection) -> Result<usize, StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Name matches by substring (SQLite LIKE, ASCII case-insensitive), platform by equality.
pub fn search_games(conn: &Connection, filter: &SearchFilter) -> Result<Vec<Game>, StoreError> {
    let mut conditions = Vec::new();
    let mut values = Vec::new();

    if let Some(name) = filter.name() {
        values.push(name);
        conditions.push(format!("name LIKE '%' || ?{} || '%'", values.len()));
    }

    if let Some(platform) = filter.platform() {
        values.push(platform);
        conditions.push(format!("platform = ?{}", values.len()));
    }

    let mut sql = format!("SELECT {} FROM games", GAME_COLUMNS);
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let games = stmt
        .query_map(params_from_iter(values), game_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(games)
}

pub fn insert_game(conn: &Connection, draft: &GameDraft) -> Result<Game, StoreError> {
    conn.execute(
        INSERT_GAME_SQL,
        params![
            draft.publisher_id,
            draft.name,
            draft.platform,
            draft.store_id,
            draft.bundle_id,
            draft.app_version,
            draft.is_published,
            draft.release_date,
        ],
    )
    .map_err(StoreError::from_write)?;

    let id = conn.last_insert_rowid();
    find_game(conn, id)?.ok_or(StoreError::NotFound(id))
}

/// Replaces every mutable field of the game. `release_date` is left untouched.
pub fn update_game(conn: &Connection, id: i64, draft: &GameDraft) -> Result<Game, StoreError> {
    let changed = conn
        .execute(
            "UPDATE games SET
                 publisher_id = ?2,
                 name = ?3,
                 platform = ?4,
                 store_id = ?5,
                 bundle_id = ?6,
                 app_version = ?7,
                 is_published = ?8,
                 updated_at = datetime('now')
             WHERE id = ?1",
            params![
                id,
                draft.publisher_id,
                draft.name,
                draft.platform,
                draft.store_id,
                draft.bundle_id,
                draft.app_version,
                draft.is_published,
            ],
        )
        .map_err(StoreError::from_write)?;

    if changed == 0 {
        return Err(StoreError::NotFound(id));
    }

    find_game(conn, id)?.ok_or(StoreError::NotFound(id))
}

pub fn delete_game(conn: &Connection, id: i64) -> Result<i64, StoreError> {
    let changed = conn.execute("DELETE FROM games WHERE id = ?1", params![id])?;

    if changed == 0 {
        return Err(StoreError::NotFound(id));
    }

    Ok(id)
}

/// Inserts all drafts in one transaction, skipping rows that collide with a
/// unique constraint. Returns how many rows were actually written.
pub fn insert_games_ignoring_duplicates(
    conn: &mut Connection,
    drafts: &[GameDraft],
) -> Result<usize, StoreError> {
    let tx = conn.transaction()?;
    let mut inserted = 0;

    {
        let mut stmt = tx.prepare(INSERT_OR_IGNORE_GAME_SQL)?;
        for draft in drafts {
            inserted += stmt.execute(params![
                draft.publisher_id,
                draft.name,
                draft.platform,
                draft.store_id,
                draft.bundle_id,
                draft.app_version,
                draft.is_published,
                draft.release_date,
            ])?;
        }
    }

    tx.commit()?;
    Ok(inserted)
}
