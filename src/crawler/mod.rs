//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`Fetcher`] trait
//! - HTML parsing into titles, text excerpts, links and images
//! - The per-run BFS frontier
//! - Overall crawl coordination and progress reporting

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod record;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use frontier::{Frontier, QueuedUrl};
pub use parser::{clean_text, parse_document, parse_html, ParsedPage, TEXT_PREVIEW_LIMIT};
pub use record::{PageRecord, TRANSPORT_FAILURE_STATUS};

use crate::config::CrawlConfig;
use crate::CrawlError;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration (seed URL, limits)
/// 2. Build the HTTP client
/// 3. Drain the frontier breadth-first, calling `on_page` for every page
/// 4. Return every recorded page in visitation order
///
/// # Arguments
///
/// * `config` - The crawl configuration
/// * `on_page` - Progress sink, called once per page in visitation order
///
/// # Returns
///
/// * `Ok(Vec<PageRecord>)` - Crawl completed
/// * `Err(CrawlError)` - The configuration was rejected before any fetch
///
/// # Example
///
/// ```no_run
/// use seedcrawl::config::CrawlConfig;
/// use seedcrawl::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlConfig::new("https://example.com/");
/// let pages = crawl(config, |page| println!("{} {}", page.status_code, page.url)).await?;
/// println!("{} pages", pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl<S>(config: CrawlConfig, on_page: S) -> Result<Vec<PageRecord>, CrawlError>
where
    S: FnMut(&PageRecord),
{
    let crawler = Crawler::new(config)?;
    Ok(crawler.run_with_progress(on_page).await)
}
