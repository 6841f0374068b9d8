//! Memoizing wrapper around the suggestion API client.

use leadgen_api::types::RawCompany;
use leadgen_api::{Client, SuggestQuery};

use crate::cache::MemoryCache;
use crate::error::LeadGenError;

/// Suggestion client that memoizes successful lookups and degrades failures.
///
/// Cache hits bypass the network entirely. Identical `(keyword, limit)`
/// pairs reuse the cached response until it expires or is evicted; failed
/// calls are never cached.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
}

impl CachedClient {
    /// Creates a new cached client using the production API URL.
    pub fn new(cache: MemoryCache) -> Self {
        Self {
            inner: Client::new(),
            cache,
        }
    }

    /// Creates a new cached client with a custom base URL.
    pub fn with_base_url(base_url: &str, cache: MemoryCache) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            cache,
        }
    }

    /// Fetches suggestions, surfacing any API or cache error to the caller.
    pub async fn try_suggest(
        &self,
        query: &SuggestQuery,
    ) -> Result<Vec<RawCompany>, LeadGenError> {
        let cache_key = query.cache_key();

        if let Some(cached) = self.cache.get(&cache_key) {
            tracing::debug!("suggestion cache hit for {}", cache_key);
            let companies: Vec<RawCompany> = serde_json::from_str(&cached)
                .map_err(|e| LeadGenError::Cache(e.to_string()))?;
            return Ok(companies);
        }

        let companies = self.inner.suggest(query).await?;
        if let Ok(json) = serde_json::to_string(&companies) {
            self.cache.set(cache_key, json);
        }
        Ok(companies)
    }

    /// Fetches suggestions, returning an empty list on any failure.
    pub async fn suggest(&self, query: &SuggestQuery) -> Vec<RawCompany> {
        match self.try_suggest(query).await {
            Ok(companies) => companies,
            Err(e) => {
                tracing::warn!(
                    "suggestion source unavailable for '{}': {}",
                    query.keyword,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
