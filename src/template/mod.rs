//! README template retrieval.
//!
//! Fetches the reference README template from a remote raw-file URL. The
//! template is treated as an opaque Markdown string used only for style
//! guidance; it is never parsed. Every call re-fetches with no retry and no
//! caching, so two back-to-back fetches of an unchanged resource return
//! byte-identical text.

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

/// Default remote location of the reference README template.
pub const DEFAULT_TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/XpressAI/xai-sendgrid/main/README.md";

/// Request timeout for template fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the README template from a fixed remote URL.
pub struct TemplateFetcher {
    url: String,
    http_client: Client,
}

impl TemplateFetcher {
    /// Create a fetcher for the given raw-file URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// URL the fetcher reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the template text.
    ///
    /// Fails with `FetchError` on a network failure or any non-success
    /// HTTP status.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        tracing::info!(url = self.url.as_str(), bytes = text.len(), "Template fetched");
        Ok(text)
    }
}

impl Default for TemplateFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fetcher_url() {
        let fetcher = TemplateFetcher::default();
        assert_eq!(fetcher.url(), DEFAULT_TEMPLATE_URL);
    }

    #[tokio::test]
    async fn test_fetch_connection_error() {
        // Port with no listener: the request itself fails.
        let fetcher = TemplateFetcher::new("http://127.0.0.1:65535/README.md");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::RequestFailed(_)));
    }
}
