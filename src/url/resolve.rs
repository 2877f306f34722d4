use url::Url;

/// Resolves a raw href against the page it appeared on
///
/// Standard base + relative resolution. Returns `None` for empty hrefs and
/// unparseable references. Any scheme is kept; a `mailto:` or
/// `javascript:` target has no host, so same-site scoping rejects it, and
/// otherwise its fetch fails like any other transport error.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seedcrawl::url::resolve_link;
///
/// let base = Url::parse("https://a.test/docs/index.html").unwrap();
/// let resolved = resolve_link(&base, "../b").unwrap();
/// assert_eq!(resolved.as_str(), "https://a.test/b");
/// ```
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    base.join(href).ok()
}
