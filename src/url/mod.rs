//! URL handling module for seedcrawl
//!
//! This module provides seed parsing, link resolution and the host
//! comparison used for same-domain scoping.

mod domain;
mod resolve;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::{extract_host, same_site, site_key};
pub use resolve::resolve_link;

/// Parses a seed URL, requiring an http(s) scheme and a host
///
/// # Examples
///
/// ```
/// use seedcrawl::url::parse_seed_url;
///
/// let seed = parse_seed_url("https://a.test").unwrap();
/// assert_eq!(seed.as_str(), "https://a.test/");
/// assert!(parse_seed_url("a.test/no-scheme").is_err());
/// ```
pub fn parse_seed_url(input: &str) -> UrlResult<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlError::Parse(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::InvalidScheme(other.to_string())),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
