//! Single-shot homepage fetcher.

use std::time::Duration;

use crate::{types::PageContent, user_agent::get_user_agent};

/// Per-fetch timeout used when none is configured.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches company homepages with one timed GET per domain.
///
/// Any failure collapses to [`PageContent::Unreachable`]. Non-2xx responses
/// still hand their body back so callers can attempt a best-effort parse.
pub struct PageFetcher {
    http: Option<reqwest::Client>,
    scheme: String,
}

impl PageFetcher {
    /// Creates a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(timeout)
            .build()
            .map_err(|e| tracing::error!("Failed to build HTTP client: {}", e))
            .ok();
        Self {
            http,
            scheme: "https".to_string(),
        }
    }

    /// Overrides the URL scheme. Used for testing against plain-HTTP mock servers.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// The URL fetched for `domain`.
    pub fn url_for(&self, domain: &str) -> String {
        format!("{}://{}", self.scheme, domain.trim())
    }

    /// Issues exactly one GET for the domain's homepage.
    pub async fn fetch_page(&self, domain: &str) -> PageContent {
        let Some(http) = &self.http else {
            return PageContent::Unreachable;
        };
        let url = self.url_for(domain);

        let resp = match http
            .get(&url)
            .header("accept", "text/html,application/xhtml+xml")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!("Fetch failed for {}: {}", url, e);
                return PageContent::Unreachable;
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!("{} returned status {}, parsing body anyway", url, status);
        }

        match resp.text().await {
            Ok(body) => PageContent::Html(body),
            Err(e) => {
                tracing::debug!("Failed to read body from {}: {}", url, e);
                PageContent::Unreachable
            }
        }
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_uses_https_by_default() {
        let fetcher = PageFetcher::default();
        assert_eq!(fetcher.url_for("segment.com"), "https://segment.com");
    }

    #[test]
    fn url_for_trims_domain() {
        let fetcher = PageFetcher::default().with_scheme("http");
        assert_eq!(fetcher.url_for(" acme.io "), "http://acme.io");
    }
}
