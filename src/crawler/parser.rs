//! HTML parser for extracting page data
//!
//! This module turns a response body into:
//! - The page title (first `<title>`)
//! - A whitespace-normalized text excerpt
//! - Raw link hrefs (`<a href>`) and image sources (`<img src>`)
//!
//! Parsing is lenient: malformed markup still yields whatever could be
//! recovered, and never an error.

use scraper::{Html, Selector};

/// Maximum number of characters kept in a text excerpt
pub const TEXT_PREVIEW_LIMIT: usize = 500;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Trimmed title text, empty if the page has none
    pub title: String,

    /// All text in the document, whitespace runs collapsed
    pub text: String,

    /// `href` values in document order, unresolved
    pub links: Vec<String>,

    /// `src` values in document order, unresolved
    pub images: Vec<String>,
}

impl ParsedPage {
    /// Returns the text truncated to [`TEXT_PREVIEW_LIMIT`] characters
    pub fn text_preview(&self) -> String {
        truncate_chars(&self.text, TEXT_PREVIEW_LIMIT)
    }
}

/// Parses raw response bytes
///
/// The body is decoded as UTF-8, replacing invalid sequences.
///
/// # Example
///
/// ```
/// use seedcrawl::crawler::parse_document;
///
/// let html = br#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_document(html);
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.links, vec!["/page".to_string()]);
/// ```
pub fn parse_document(body: &[u8]) -> ParsedPage {
    let html = String::from_utf8_lossy(body);
    parse_html(&html)
}

/// Parses HTML text
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        text: clean_text(&document.root_element().text().collect::<String>()),
        links: collect_attribute(&document, "a[href]", "href"),
        images: collect_attribute(&document, "img[src]", "src"),
    }
}

/// Collapses every whitespace run to a single space and trims the ends
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn collect_attribute(document: &Html, selector: &str, attribute: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attribute))
        .map(str::to_string)
        .collect()
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
