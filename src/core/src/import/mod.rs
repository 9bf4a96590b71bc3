mod entry;
mod error;
mod importer;

pub use entry::{CatalogEntry, CatalogPage, normalize_entries};
pub use error::ImportError;
pub use importer::{CatalogImporter, CatalogSources};
