//! SQLite persistence for the game catalog.

mod error;
mod schema;
mod store;

pub use error::StoreError;
pub use schema::{create_schema, open_database, open_memory};
pub use store::GameStore;
