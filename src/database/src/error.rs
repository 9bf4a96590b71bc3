use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Game with ID {0} not found")]
    NotFound(i64),

    #[error("Game conflicts with an existing record: {0}")]
    Conflict(String),

    #[error("Store is unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Turns unique constraint violations into `Conflict`, leaving other errors as they are.
    pub(crate) fn from_write(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                StoreError::Conflict(message.unwrap_or_else(|| "unique constraint".to_string()))
            }
            other => StoreError::Sqlite(other),
        }
    }
}
