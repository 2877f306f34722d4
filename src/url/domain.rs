use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seedcrawl::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the host plus explicit port, the key used for domain scoping
///
/// Default ports are already dropped by URL parsing, so `https://a.test:443/`
/// and `https://a.test/` share a key while `http://a.test:8080/` does not.
pub fn site_key(url: &Url) -> Option<String> {
    let host = extract_host(url)?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    })
}

/// Returns true if both URLs belong to the same site
///
/// URLs without a host never match anything.
pub fn same_site(a: &Url, b: &Url) -> bool {
    match (site_key(a), site_key(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
