use crate::GameDraft;
use crate::utils::loose_text;
use chrono::{DateTime, NaiveDate};
use log::warn;
use serde::Deserialize;

/// One raw record of a remote top-100 catalog.
///
/// Catalog feeds are loose: ids come as numbers or strings and blank strings
/// stand in for missing values, so every field is read as optional text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub os: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub publisher_id: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub bundle_id: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub version: Option<String>,
}

impl CatalogEntry {
    /// Maps the entry onto the game shape, or `None` when it has no name or platform.
    pub fn into_draft(self) -> Option<GameDraft> {
        let name = self.name?;
        let platform = self.os?;

        let is_published = self.release_date.is_some();
        let release_date = self.release_date.as_deref().and_then(parse_release_date);

        Some(GameDraft {
            publisher_id: self.publisher_id,
            name,
            platform,
            store_id: self.website_url,
            bundle_id: self.bundle_id,
            app_version: self.version,
            is_published,
            release_date,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogNode {
    Group(Vec<CatalogEntry>),
    Single(CatalogEntry),
}

/// A catalog response body: a list whose items are entries or lists of entries.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct CatalogPage(Vec<CatalogNode>);

impl CatalogPage {
    /// Flattens the page by one level.
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.0
            .into_iter()
            .flat_map(|node| match node {
                CatalogNode::Group(entries) => entries,
                CatalogNode::Single(entry) => vec![entry],
            })
            .collect()
    }
}

pub fn normalize_entries<I>(entries: I) -> Vec<GameDraft>
where
    I: IntoIterator<Item = CatalogEntry>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let bundle_id = entry.bundle_id.clone();
            let draft = entry.into_draft();

            if draft.is_none() {
                warn!("skipping catalog entry without name or os, bundle_id: {:?}", bundle_id);
            }

            draft
        })
        .collect()
}

fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|date| date.date_naive()))
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_maps_to_published_game() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{
                "name": "Candy Crush Saga",
                "os": "ios",
                "release_date": "2012-11-14T00:00:00Z",
                "publisher_id": 526656015,
                "website_url": "https://candycrushsaga.com",
                "bundle_id": "com.midasplayer.apps.candycrushsaga",
                "version": "1.250.0"
            }"#,
        )
        .unwrap();

        let draft = entry.into_draft().unwrap();

        assert_eq!(draft.name, "Candy Crush Saga");
        assert_eq!(draft.platform, "ios");
        assert_eq!(draft.publisher_id.as_deref(), Some("526656015"));
        assert_eq!(draft.store_id.as_deref(), Some("https://candycrushsaga.com"));
        assert_eq!(draft.bundle_id.as_deref(), Some("com.midasplayer.apps.candycrushsaga"));
        assert_eq!(draft.app_version.as_deref(), Some("1.250.0"));
        assert_eq!(draft.release_date, NaiveDate::from_ymd_opt(2012, 11, 14));
        assert!(draft.is_published);
    }

    #[test]
    fn missing_and_blank_fields_become_none() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{ "name": "Subway Surfers", "os": "android", "release_date": "", "website_url": null, "version": "" }"#,
        )
        .unwrap();

        let draft = entry.into_draft().unwrap();

        assert_eq!(draft.release_date, None);
        assert_eq!(draft.store_id, None);
        assert_eq!(draft.app_version, None);
        assert_eq!(draft.publisher_id, None);
        assert!(!draft.is_published);
    }

    #[test]
    fn unparseable_release_date_still_marks_published() {
        let entry = CatalogEntry {
            name: Some("Roblox".to_string()),
            os: Some("android".to_string()),
            release_date: Some("sometime in 2006".to_string()),
            ..Default::default()
        };

        let draft = entry.into_draft().unwrap();

        assert!(draft.is_published);
        assert_eq!(draft.release_date, None);
    }

    #[test]
    fn whitespace_release_date_counts_as_published() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{ "name": "Roblox", "os": "ios", "release_date": " ", "bundle_id": true }"#,
        )
        .unwrap();

        let draft = entry.into_draft().unwrap();

        assert!(draft.is_published);
        assert_eq!(draft.release_date, None);
        assert_eq!(draft.bundle_id.as_deref(), Some("true"));
    }

    #[test]
    fn page_is_flattened_one_level() {
        let page: CatalogPage = serde_json::from_str(
            r#"[
                [{ "name": "A", "os": "ios" }, { "name": "B", "os": "ios" }],
                [{ "name": "C", "os": "ios" }],
                { "name": "D", "os": "ios" }
            ]"#,
        )
        .unwrap();

        let names: Vec<String> = page
            .into_entries()
            .into_iter()
            .filter_map(|entry| entry.name)
            .collect();

        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn entries_without_name_or_os_are_skipped() {
        let entries = vec![
            CatalogEntry {
                name: Some("Among Us".to_string()),
                os: Some("ios".to_string()),
                ..Default::default()
            },
            CatalogEntry {
                name: None,
                os: Some("ios".to_string()),
                ..Default::default()
            },
            CatalogEntry {
                name: Some("Nameless Platform".to_string()),
                os: None,
                ..Default::default()
            },
        ];

        let drafts = normalize_entries(entries);

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "Among Us");
    }

    #[test]
    fn date_prefix_is_accepted() {
        assert_eq!(
            parse_release_date("2019-05-01 08:00:00"),
            NaiveDate::from_ymd_opt(2019, 5, 1)
        );
        assert_eq!(parse_release_date("n/a"), None);
    }
}
