//! Result of a single homepage fetch.

/// Raw HTML of a fetched page, or a marker that the fetch failed.
///
/// Failure causes (DNS, TLS, timeout) are deliberately collapsed into one
/// variant; callers only ever fall back to sentinel values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageContent {
    Html(String),
    Unreachable,
}

impl PageContent {
    /// Returns the HTML body, or `None` when the page was unreachable.
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Html(html) => Some(html),
            Self::Unreachable => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }
}
