/// Errors raised while fetching or decoding a remote catalog.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog {url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Catalog {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
