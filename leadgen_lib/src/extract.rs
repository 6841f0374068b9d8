//! Best-effort extraction of descriptions and social links from homepage HTML.

use std::sync::LazyLock;

use leadgen_api::types::PageContent;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Returned when no description could be found or the page was unreachable.
pub const NO_DESCRIPTION: &str = "No description available";

/// Placeholder for social links that were not found.
pub const NOT_FOUND: &str = "N/A";

static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).expect("valid selector"));
static OG_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("valid selector")
});
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

/// Social profile links found on a homepage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            linkedin: NOT_FOUND.to_string(),
            twitter: NOT_FOUND.to_string(),
        }
    }
}

/// Extracts a textual description from a fetched page.
///
/// Tries `<meta name="description">`, then `<meta property="og:description">`,
/// then the first `<p>` element. Blank candidates are skipped. Returns
/// [`NO_DESCRIPTION`] when nothing matches or the page was unreachable.
pub fn extract_description(page: &PageContent) -> String {
    let Some(html) = page.html() else {
        return NO_DESCRIPTION.to_string();
    };
    let doc = Html::parse_document(html);

    meta_content(&doc, &META_DESCRIPTION)
        .or_else(|| meta_content(&doc, &OG_DESCRIPTION))
        .or_else(|| first_paragraph(&doc))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Scans anchors in document order for LinkedIn and Twitter profile links.
///
/// The first href containing `linkedin.com` (resp. `twitter.com`) wins;
/// unmatched fields are [`NOT_FOUND`].
pub fn extract_social_links(page: &PageContent) -> SocialLinks {
    let Some(html) = page.html() else {
        return SocialLinks::default();
    };
    let doc = Html::parse_document(html);

    let mut linkedin = None;
    let mut twitter = None;
    for el in doc.select(&ANCHOR) {
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        if linkedin.is_none() && href.contains("linkedin.com") {
            linkedin = Some(href.to_string());
        }
        if twitter.is_none() && href.contains("twitter.com") {
            twitter = Some(href.to_string());
        }
        if linkedin.is_some() && twitter.is_some() {
            break;
        }
    }

    SocialLinks {
        linkedin: linkedin.unwrap_or_else(|| NOT_FOUND.to_string()),
        twitter: twitter.unwrap_or_else(|| NOT_FOUND.to_string()),
    }
}

fn meta_content(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .filter_map(|el| el.value().attr("content"))
        .map(normalize_whitespace)
        .find(|content| !content.is_empty())
}

fn first_paragraph(doc: &Html) -> Option<String> {
    doc.select(&PARAGRAPH)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> PageContent {
        PageContent::Html(html.to_string())
    }

    // -- Description --

    #[test]
    fn meta_description_wins() {
        let html = r#"<html><head>
            <meta property="og:description" content="OG text">
            <meta name="description" content="Customer data platform.">
            </head><body><p>Paragraph text</p></body></html>"#;
        assert_eq!(extract_description(&page(html)), "Customer data platform.");
    }

    #[test]
    fn og_description_is_second_choice() {
        let html = r#"<html><head><meta property="og:description" content="OG text"></head>
            <body><p>Paragraph text</p></body></html>"#;
        assert_eq!(extract_description(&page(html)), "OG text");
    }

    #[test]
    fn first_paragraph_is_third_choice() {
        let html = "<html><body><p>We build tools for teams.</p><p>Second</p></body></html>";
        assert_eq!(extract_description(&page(html)), "We build tools for teams.");
    }

    #[test]
    fn blank_meta_falls_through() {
        let html = r#"<html><head><meta name="description" content="   "></head>
            <body><p>Fallback paragraph</p></body></html>"#;
        assert_eq!(extract_description(&page(html)), "Fallback paragraph");
    }

    #[test]
    fn paragraph_whitespace_is_collapsed() {
        let html = "<p>\n  Ship   <b>faster</b>\n  today </p>";
        assert_eq!(extract_description(&page(html)), "Ship faster today");
    }

    #[test]
    fn nothing_found_returns_sentinel() {
        let html = "<html><head><title>Hi</title></head><body><div>no p</div></body></html>";
        assert_eq!(extract_description(&page(html)), NO_DESCRIPTION);
    }

    #[test]
    fn empty_first_paragraph_returns_sentinel() {
        let html = "<html><body><p>   </p><p>later text</p></body></html>";
        assert_eq!(extract_description(&page(html)), NO_DESCRIPTION);
    }

    #[test]
    fn unreachable_returns_sentinel() {
        assert_eq!(extract_description(&PageContent::Unreachable), NO_DESCRIPTION);
    }

    // -- Social links --

    #[test]
    fn first_matching_links_win() {
        let html = r#"<body>
            <a href="/about">About</a>
            <a href="https://twitter.com/acme">tw</a>
            <a href="https://www.linkedin.com/company/acme">li</a>
            <a href="https://twitter.com/acme_support">tw2</a>
            <a href="https://linkedin.com/company/other">li2</a>
            </body>"#;
        let links = extract_social_links(&page(html));
        assert_eq!(links.linkedin, "https://www.linkedin.com/company/acme");
        assert_eq!(links.twitter, "https://twitter.com/acme");
    }

    #[test]
    fn missing_links_are_not_found() {
        let html = r#"<a href="https://github.com/acme">gh</a><a href="https://x.com/acme">x</a>"#;
        assert_eq!(extract_social_links(&page(html)), SocialLinks::default());
    }

    #[test]
    fn only_linkedin_present() {
        let html = r#"<a href="https://linkedin.com/company/acme">li</a>"#;
        let links = extract_social_links(&page(html));
        assert_eq!(links.linkedin, "https://linkedin.com/company/acme");
        assert_eq!(links.twitter, NOT_FOUND);
    }

    #[test]
    fn unreachable_has_no_links() {
        let links = extract_social_links(&PageContent::Unreachable);
        assert_eq!(links.linkedin, NOT_FOUND);
        assert_eq!(links.twitter, NOT_FOUND);
    }
}
