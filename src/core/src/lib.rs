pub mod game;
pub mod import;
pub mod utils;

pub use game::{Game, GameDraft, SearchFilter};
pub use import::{CatalogEntry, CatalogImporter, CatalogPage, CatalogSources, ImportError};
