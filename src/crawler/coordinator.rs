//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop:
//! - Draining the frontier in FIFO order under the page budget
//! - Filtering entries beyond the depth limit and already-visited URLs
//! - Fetching and parsing each page into a [`PageRecord`]
//! - Reporting every record to the progress sink before expanding it
//! - Resolving and scoping outbound links back into the frontier

use crate::config::{validate_crawl_config, CrawlConfig};
use crate::crawler::fetcher::{FetchedPage, Fetcher, HttpFetcher};
use crate::crawler::frontier::{Frontier, QueuedUrl};
use crate::crawler::parser::parse_document;
use crate::crawler::record::{PageRecord, TRANSPORT_FAILURE_STATUS};
use crate::url::{resolve_link, same_site};
use crate::CrawlError;
use chrono::Utc;
use std::time::Instant;
use url::Url;

/// Only pages answered with this status have their links followed
const SUCCESS_STATUS: u16 = 200;

/// Bounded breadth-first crawler
///
/// The crawler holds only immutable configuration and the fetcher. Each
/// call to [`Crawler::run_with_progress`] builds its own [`Frontier`], so
/// one crawler can be run repeatedly and separate crawlers never share a
/// visited set.
pub struct Crawler<F = HttpFetcher> {
    config: CrawlConfig,
    seed: Url,
    fetcher: F,
}

impl Crawler<HttpFetcher> {
    /// Creates a crawler that fetches over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Configuration is valid and the client was built
    /// * `Err(CrawlError)` - Invalid seed URL or limits, or client failure
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        validate_crawl_config(&config)?;
        let fetcher = HttpFetcher::from_config(&config)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a crawler with a custom fetcher
    pub fn with_fetcher(config: CrawlConfig, fetcher: F) -> Result<Self, CrawlError> {
        let seed = validate_crawl_config(&config)?;

        if config.respect_robots_txt {
            tracing::warn!("respect-robots-txt is set but robots.txt is not consulted");
        }

        Ok(Self {
            config,
            seed,
            fetcher,
        })
    }

    /// Runs the crawl without observing progress
    pub async fn run(&self) -> Vec<PageRecord> {
        self.run_with_progress(|_| {}).await
    }

    /// Runs the crawl, calling `on_page` once per recorded page
    ///
    /// `on_page` is called in visitation order, after the record is added to
    /// the result list and before any of its links are queued. Transport
    /// failures become records with status 0; nothing on the page level
    /// stops the run. The returned list is in the same order.
    pub async fn run_with_progress<S>(&self, mut on_page: S) -> Vec<PageRecord>
    where
        S: FnMut(&PageRecord),
    {
        let max_pages = self.config.max_pages;
        let max_depth = self.config.max_depth;
        let start_time = Instant::now();

        let mut frontier = Frontier::with_seed(self.seed.as_str());
        let mut pages: Vec<PageRecord> = Vec::new();

        tracing::info!(
            "Starting crawl of {} (max pages {}, max depth {}, same domain only {})",
            self.seed,
            max_pages,
            max_depth,
            self.config.same_domain_only
        );

        while pages.len() < max_pages {
            let Some(QueuedUrl { url, depth }) = frontier.pop() else {
                tracing::debug!("Frontier is empty");
                break;
            };

            if depth > max_depth {
                tracing::trace!("Dropping {} at depth {}", url, depth);
                continue;
            }

            if !frontier.mark_visited(&url) {
                tracing::trace!("Already visited {}", url);
                continue;
            }

            tracing::debug!("Fetching {} (depth {})", url, depth);
            let response = match self.fetcher.fetch(&url).await {
                Ok(page) => Some(page),
                Err(e) => {
                    tracing::warn!("{}", e);
                    None
                }
            };

            let follow_links = response
                .as_ref()
                .is_some_and(|page| page.status == SUCCESS_STATUS);

            pages.push(self.build_record(url, depth, response.as_ref()));
            let Some(record) = pages.last() else {
                continue;
            };

            on_page(record);

            if follow_links && self.config.extract_links {
                self.enqueue_links(&mut frontier, record);
            }
        }

        tracing::info!(
            "Crawl completed: {} pages in {:?} ({} queued entries left)",
            pages.len(),
            start_time.elapsed(),
            frontier.len()
        );

        pages
    }

    /// Builds the record for one fetch attempt
    ///
    /// Any received body is parsed, whatever the status. Without a body all
    /// extracted fields stay empty.
    fn build_record(&self, url: String, depth: u32, response: Option<&FetchedPage>) -> PageRecord {
        let status_code = response.map_or(TRANSPORT_FAILURE_STATUS, |page| page.status);
        let parsed = response
            .filter(|page| !page.body.is_empty())
            .map(|page| parse_document(&page.body))
            .unwrap_or_default();

        let text_preview = parsed.text_preview();

        PageRecord {
            url,
            status_code,
            title: parsed.title,
            text_preview,
            links: if self.config.extract_links {
                parsed.links
            } else {
                Vec::new()
            },
            images: if self.config.include_images {
                parsed.images
            } else {
                Vec::new()
            },
            depth,
            fetched_at: Utc::now(),
        }
    }

    /// Queues every in-scope link of a page at the next depth
    ///
    /// Only the visited set is consulted, so a URL linked several times is
    /// queued several times; the visited check at dequeue keeps it to one
    /// fetch.
    fn enqueue_links(&self, frontier: &mut Frontier, page: &PageRecord) {
        let Ok(base) = Url::parse(&page.url) else {
            tracing::debug!("Cannot resolve links against {}", page.url);
            return;
        };
        let next_depth = page.depth + 1;

        for link in &page.links {
            let Some(resolved) = resolve_link(&base, link) else {
                tracing::trace!("Skipping unresolvable link {:?}", link);
                continue;
            };

            if self.config.same_domain_only && !same_site(&resolved, &self.seed) {
                tracing::trace!("Skipping off-site link {}", resolved);
                continue;
            }

            let resolved = String::from(resolved);
            if !frontier.is_visited(&resolved) {
                frontier.push(resolved, next_depth);
            }
        }
    }
}
