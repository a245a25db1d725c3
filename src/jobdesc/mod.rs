//! Job description pages → plain query text.

mod error;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

pub use error::{JobDescriptionError, JobDescriptionResult};

use crate::catalog::scrape::collapse_whitespace;

static JOB_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".job-description").expect("valid job description selector"));
static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid body selector"));

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

#[async_trait]
/// Fetches the text of a job posting.
pub trait JobDescriptionSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> JobDescriptionResult<String>;
}

/// Fetches a page over HTTP(S) and extracts the posting text.
#[derive(Debug, Clone)]
pub struct HttpJobDescriptionSource {
    http: HttpClient,
}

impl HttpJobDescriptionSource {
    pub fn new(timeout: Duration) -> JobDescriptionResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("assessment-recommender/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JobDescriptionError::Request {
                url: String::new(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { http })
    }
}

#[async_trait]
impl JobDescriptionSource for HttpJobDescriptionSource {
    async fn fetch_text(&self, url: &str) -> JobDescriptionResult<String> {
        let parsed = validate_url(url)?;
        debug!(url = %parsed, "Fetching job description");

        let request_err = |e: reqwest::Error| JobDescriptionError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.http.get(parsed).send().await.map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobDescriptionError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(request_err)?;
        let text = extract_text(&html).ok_or_else(|| JobDescriptionError::NoContent {
            url: url.to_string(),
        })?;

        info!(url, chars = text.len(), "Job description fetched");
        Ok(text)
    }
}

/// Accepts absolute `http`/`https` URLs only.
pub fn validate_url(url: &str) -> JobDescriptionResult<Url> {
    let parsed = Url::parse(url).map_err(|e| JobDescriptionError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(JobDescriptionError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}

/// Text of the first `.job-description` element, else the visible `<body>` text.
///
/// Returns `None` when the result is blank.
pub fn extract_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let text = match document.select(&JOB_DESCRIPTION).next() {
        Some(section) => visible_text(section),
        None => document
            .select(&BODY)
            .next()
            .map(visible_text)
            .unwrap_or_default(),
    };

    (!text.is_empty()).then_some(text)
}

fn visible_text(root: ElementRef<'_>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| HIDDEN_ELEMENTS.contains(&el.value().name()));
        if !hidden {
            parts.push(text);
        }
    }
    collapse_whitespace(&parts.join(" "))
}

/// Serves canned page text per URL.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct MockJobDescriptionSource {
    pages: std::collections::HashMap<String, String>,
}

#[cfg(any(test, feature = "mock"))]
impl MockJobDescriptionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.insert(url.into(), text.into());
        self
    }
}

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl JobDescriptionSource for MockJobDescriptionSource {
    async fn fetch_text(&self, url: &str) -> JobDescriptionResult<String> {
        validate_url(url)?;
        match self.pages.get(url) {
            Some(text) if !text.trim().is_empty() => Ok(text.clone()),
            Some(_) => Err(JobDescriptionError::NoContent {
                url: url.to_string(),
            }),
            None => Err(JobDescriptionError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
