// src/scraper/client.rs
use crate::scraper::SearchRequest;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Fetches a source's search result page as text.
pub trait FetchDocument {
    fn fetch(&self, request: &SearchRequest) -> Result<String, ScraperError>;
}

/// Blocking HTTP fetcher. One attempt per call; a failed source simply
/// waits for the next scheduled run.
pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new(timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl FetchDocument for SourceClient {
    fn fetch(&self, request: &SearchRequest) -> Result<String, ScraperError> {
        let (url, builder) = match request {
            SearchRequest::Get { url } => (url, self.client.get(url)),
            // `.form` sets the urlencoded content type and keeps repeated keys.
            SearchRequest::PostForm { url, form } => (url, self.client.post(url).form(form)),
        };

        tracing::info!(%url, "fetching listings");
        let start = std::time::Instant::now();

        let resp = builder
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                status: status.as_u16(),
                url: url.clone(),
            });
        }

        // Decodes using the charset from Content-Type, UTF-8 otherwise.
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        tracing::debug!(bytes = text.len(), elapsed = ?start.elapsed(), "fetched listings page");
        Ok(text)
    }
}
