//! Live catalog sources consulted on a cache miss.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info};

use super::error::{CatalogError, CatalogResult};
use super::record::AssessmentRecord;
use super::scrape::parse_listing;

#[async_trait]
/// Fetches a fresh record list from the assessment provider.
pub trait CatalogSource: Send + Sync {
    /// Returns the provider's current records. An empty listing is an error.
    async fn fetch(&self) -> CatalogResult<Vec<AssessmentRecord>>;

    /// Short description for logs (usually the URL).
    fn describe(&self) -> String;
}

/// Scrapes the provider's HTML product listing.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    http: HttpClient,
}

impl HttpCatalogSource {
    /// Creates a source with a bounded request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
        let url = url.into();
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("assessment-recommender/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Fetch {
                url: url.clone(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { url, http })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> CatalogResult<Vec<AssessmentRecord>> {
        debug!(url = %self.url, "Fetching catalog listing");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| CatalogError::Fetch {
            url: self.url.clone(),
            reason: format!("failed to read body: {}", e),
        })?;

        let records = parse_listing(&html, &self.url);
        if records.is_empty() {
            return Err(CatalogError::EmptyListing {
                url: self.url.clone(),
            });
        }

        info!(url = %self.url, records = records.len(), "Catalog listing scraped");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// In-memory source: fixed records, or a forced failure.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct MockCatalogSource {
    records: Option<Vec<AssessmentRecord>>,
    fetches: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "mock"))]
impl MockCatalogSource {
    /// A source that always returns `records`.
    pub fn with_records(records: Vec<AssessmentRecord>) -> Self {
        Self {
            records: Some(records),
            ..Default::default()
        }
    }

    /// A source whose fetch always fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch(&self) -> CatalogResult<Vec<AssessmentRecord>> {
        self.fetches
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match &self.records {
            Some(records) if !records.is_empty() => Ok(records.clone()),
            Some(_) => Err(CatalogError::EmptyListing {
                url: self.describe(),
            }),
            None => Err(CatalogError::Fetch {
                url: self.describe(),
                reason: "mock source configured to fail".to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        "mock://catalog".to_string()
    }
}
