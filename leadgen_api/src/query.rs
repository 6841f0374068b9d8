//! Query builder for the company suggestion endpoint.

use url::Url;

/// Upper bound on how many suggestions a single query may keep.
pub const MAX_SUGGESTIONS: usize = 25;

/// A keyword lookup against the suggestion service.
///
/// The service itself has no page-size parameter, so `limit` is applied
/// client-side after the response is parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuggestQuery {
    /// Keyword sent as the `query` parameter. Always stored trimmed.
    pub keyword: String,
    /// Maximum number of companies to keep from the response.
    pub limit: usize,
}

impl SuggestQuery {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            limit: 10,
        }
    }

    /// Sets the maximum number of results, capped at [`MAX_SUGGESTIONS`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_SUGGESTIONS);
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("query", &self.keyword);
        url
    }

    /// Stable key identifying this exact request, used for memoization.
    pub fn cache_key(&self) -> String {
        format!("suggest:{}:{}", self.keyword, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_trimmed() {
        let q = SuggestQuery::new("  Segment \n");
        assert_eq!(q.keyword, "Segment");
    }

    #[test]
    fn limit_is_capped() {
        let q = SuggestQuery::new("crm").with_limit(500);
        assert_eq!(q.limit, MAX_SUGGESTIONS);
    }

    #[test]
    fn query_param_is_encoded() {
        let base = Url::parse("https://example.com/v1/companies/suggest").unwrap();
        let url = SuggestQuery::new("AI SaaS & co").add_to_url(&base);
        assert_eq!(
            url.as_str(),
            "https://example.com/v1/companies/suggest?query=AI+SaaS+%26+co"
        );
    }

    #[test]
    fn cache_key_includes_limit() {
        let a = SuggestQuery::new("crm").with_limit(5);
        let b = SuggestQuery::new("crm").with_limit(10);
        assert_ne!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), SuggestQuery::new(" crm ").with_limit(5).cache_key());
    }
}
