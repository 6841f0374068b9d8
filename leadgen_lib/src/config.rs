//! Environment-driven settings for the network-facing stages.

use std::time::Duration;

use leadgen_api::DEFAULT_FETCH_TIMEOUT;

/// Runtime settings read from `LEADGEN_*` environment variables.
///
/// Missing or unparseable values fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadGenConfig {
    /// Base URL of the suggestion service (`LEADGEN_SUGGEST_URL`).
    pub suggest_url: Option<String>,
    /// Per-page fetch timeout (`LEADGEN_FETCH_TIMEOUT_MS`, default 5000).
    pub fetch_timeout: Duration,
    /// Suggestion memo lifetime (`LEADGEN_CACHE_TTL_SECS`, default 300).
    pub cache_ttl: Duration,
    /// Suggestion memo capacity (`LEADGEN_CACHE_MAX_ENTRIES`, default 64).
    pub cache_max_entries: usize,
}

impl Default for LeadGenConfig {
    fn default() -> Self {
        Self {
            suggest_url: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            cache_ttl: Duration::from_secs(300),
            cache_max_entries: 64,
        }
    }
}

impl LeadGenConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            suggest_url: lookup("LEADGEN_SUGGEST_URL").filter(|v| !v.trim().is_empty()),
            fetch_timeout: parse_u64(&lookup, "LEADGEN_FETCH_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.fetch_timeout),
            cache_ttl: parse_u64(&lookup, "LEADGEN_CACHE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            cache_max_entries: lookup("LEADGEN_CACHE_MAX_ENTRIES")
                .and_then(|val| val.parse::<usize>().ok())
                .unwrap_or(defaults.cache_max_entries),
        }
    }
}

fn parse_u64<F>(lookup: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|val| val.parse::<u64>().ok())
}
