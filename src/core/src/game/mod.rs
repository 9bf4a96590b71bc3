mod search;

pub use search::SearchFilter;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A stored catalog entry for a mobile game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub publisher_id: Option<String>,
    pub name: String,
    pub platform: String,
    pub store_id: Option<String>,
    pub bundle_id: Option<String>,
    pub app_version: Option<String>,
    pub is_published: bool,
    pub release_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Everything about a game except what the store assigns.
///
/// Manual creates and updates always carry `release_date: None`; only the
/// catalog import sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameDraft {
    pub publisher_id: Option<String>,
    pub name: String,
    pub platform: String,
    pub store_id: Option<String>,
    pub bundle_id: Option<String>,
    pub app_version: Option<String>,
    pub is_published: bool,
    pub release_date: Option<NaiveDate>,
}

impl GameDraft {
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        GameDraft {
            name: name.into(),
            platform: platform.into(),
            ..Default::default()
        }
    }

    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id = Some(bundle_id.into());
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self.is_published = true;
        self
    }
}
