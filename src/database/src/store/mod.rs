mod operations;

use operations::*;

use crate::{StoreError, open_database, open_memory};
use catalog::{Game, GameDraft, SearchFilter};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared handle to the games database.
///
/// SQLite calls block, so each operation runs on tokio's blocking pool while
/// holding the connection lock. Writes are serialized by that lock.
#[derive(Clone)]
pub struct GameStore {
    conn: Arc<Mutex<Connection>>,
}

impl GameStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(GameStore::from_connection(open_database(path)?))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(GameStore::from_connection(open_memory()?))
    }

    fn from_connection(conn: Connection) -> Self {
        GameStore {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub async fn list(&self) -> Result<Vec<Game>, StoreError> {
        self.call(|conn| list_games(conn)).await
    }

    pub async fn find(&self, id: i64) -> Result<Option<Game>, StoreError> {
        self.call(move |conn| find_game(conn, id)).await
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.call(|conn| count_games(conn)).await
    }

    pub async fn search(&self, filter: SearchFilter) -> Result<Vec<Game>, StoreError> {
        self.call(move |conn| search_games(conn, &filter)).await
    }

    pub async fn create(&self, draft: GameDraft) -> Result<Game, StoreError> {
        self.call(move |conn| insert_game(conn, &draft)).await
    }

    pub async fn update(&self, id: i64, draft: GameDraft) -> Result<Game, StoreError> {
        self.call(move |conn| update_game(conn, id, &draft)).await
    }

    pub async fn delete(&self, id: i64) -> Result<i64, StoreError> {
        self.call(move |conn| delete_game(conn, id)).await
    }

    pub async fn insert_ignoring_duplicates(&self, drafts: Vec<GameDraft>) -> Result<usize, StoreError> {
        self.call(move |conn| insert_games_ignoring_duplicates(conn, &drafts)).await
    }

    async fn call<T, F>(&self, action: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))?;

            action(&mut *guard)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("store task failed: {}", e)))?
    }
}
