use crate::GameDraft;
use crate::import::entry::{CatalogEntry, CatalogPage, normalize_entries};
use crate::import::error::ImportError;
use crate::utils::TimeEstimation;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_ANDROID_URL: &str =
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/android.top100.json";
pub const DEFAULT_IOS_URL: &str =
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/ios.top100.json";

#[derive(Debug, Clone)]
pub struct CatalogSources {
    pub android_url: String,
    pub ios_url: String,
}

impl Default for CatalogSources {
    fn default() -> Self {
        CatalogSources {
            android_url: DEFAULT_ANDROID_URL.to_string(),
            ios_url: DEFAULT_IOS_URL.to_string(),
        }
    }
}

/// Downloads both platform catalogs and turns them into game drafts.
#[derive(Clone)]
pub struct CatalogImporter {
    http: reqwest::Client,
    sources: Arc<CatalogSources>,
}

impl CatalogImporter {
    pub fn new(sources: CatalogSources, timeout: Duration) -> Result<Self, ImportError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(CatalogImporter {
            http,
            sources: Arc::new(sources),
        })
    }

    /// Fetches both catalogs concurrently. The first failure aborts the other
    /// request and fails the whole fetch.
    pub async fn fetch_all(&self) -> Result<Vec<GameDraft>, ImportError> {
        let (result, estimated) = TimeEstimation::estimate_async(async {
            futures::try_join!(
                self.fetch(&self.sources.android_url),
                self.fetch(&self.sources.ios_url)
            )
        })
        .await;

        let (android, ios) = result?;

        info!(
            "catalogs fetched in {} ms: {} android, {} ios entries",
            estimated,
            android.len(),
            ios.len()
        );

        Ok(normalize_entries(ios.into_iter().chain(android)))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<CatalogEntry>, ImportError> {
        debug!("fetching catalog {}", url);

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;

        let page: CatalogPage = serde_json::from_slice(&body).map_err(|source| ImportError::Decode {
            url: url.to_string(),
            source,
        })?;

        Ok(page.into_entries())
    }
}
