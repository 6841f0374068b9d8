//! HTTP client for the company autocomplete (suggestion) service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{query::SuggestQuery, types::RawCompany, user_agent::get_user_agent, Error};

const SUGGEST_PATH: &str = "/v1/companies/suggest";

/// HTTP client for the company suggestion API.
///
/// Each request builds a fresh `reqwest::Client` with a randomized user
/// agent and a 10-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://autocomplete.clearbit.com`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the public suggestion API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://autocomplete.clearbit.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_url(&self, path: &str, query: &SuggestQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T>(&self, path: &str, query: &SuggestQuery) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches company suggestions for a keyword.
    ///
    /// The response is truncated to `query.limit` entries and records without
    /// a domain are dropped, in that order.
    pub async fn suggest(&self, query: &SuggestQuery) -> Result<Vec<RawCompany>, Error> {
        let companies = self.get::<Vec<RawCompany>>(SUGGEST_PATH, query).await?;
        Ok(companies
            .into_iter()
            .take(query.limit)
            .filter(RawCompany::has_domain)
            .collect())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
