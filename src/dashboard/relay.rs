//! Runs dashboard crawls in the background and relays their progress
//!
//! Each request gets its own tokio task and its own [`Crawler`]. The
//! crawler's progress sink pushes page events into an unbounded channel;
//! when the run ends the task pushes exactly one terminal event and drops
//! the sender, which closes the stream on the receiving side. There is no
//! backpressure and no cancellation.

use crate::config::{validate_output_config, Config, CrawlConfig, OutputConfig};
use crate::crawler::Crawler;
use crate::dashboard::events::DashboardEvent;
use crate::output::{ReportBuilder, ReportPaths};
use crate::CrawlError;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

fn default_max_pages() -> usize {
    20
}

fn default_max_depth() -> u32 {
    2
}

fn default_report_name() -> String {
    "crawl-report".to_string()
}

fn default_output_dir() -> String {
    "outputs".to_string()
}

/// Query parameters of `GET /crawl`
///
/// `include_external` and `include_images` are checkbox flags: present
/// means on, absent means off.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlParams {
    pub url: Option<String>,

    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    pub include_external: Option<String>,

    pub include_images: Option<String>,

    #[serde(default = "default_report_name")]
    pub report_name: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl CrawlParams {
    /// The start URL, if one was given
    pub fn start_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    pub fn to_config(&self) -> Config {
        Config {
            crawler: CrawlConfig {
                start_url: self.start_url().unwrap_or_default().to_string(),
                max_pages: self.max_pages,
                max_depth: self.max_depth,
                same_domain_only: self.include_external.is_none(),
                include_images: self.include_images.is_some(),
                ..CrawlConfig::default()
            },
            output: OutputConfig {
                output_dir: PathBuf::from(&self.output_dir),
                report_name: self.report_name.clone(),
            },
        }
    }
}

/// Starts a crawl on a background task and returns its event stream
pub fn spawn_crawl(config: Config) -> UnboundedReceiver<DashboardEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let worker_tx = tx.clone();
        let worker = tokio::spawn(async move { run_and_report(config, &worker_tx).await });

        let terminal = match worker.await {
            Ok(Ok((pages, reports))) => DashboardEvent::complete(pages, reports),
            Ok(Err(e)) => {
                tracing::error!("Dashboard crawl failed: {}", e);
                DashboardEvent::error(e.to_string())
            }
            Err(e) => {
                tracing::error!("Dashboard crawl task failed: {}", e);
                DashboardEvent::error(format!("crawl task failed: {}", e))
            }
        };

        if tx.send(terminal).is_err() {
            tracing::debug!("Dashboard subscriber left before the crawl finished");
        }
    });

    rx
}

async fn run_and_report(
    config: Config,
    tx: &UnboundedSender<DashboardEvent>,
) -> Result<(usize, ReportPaths), CrawlError> {
    validate_output_config(&config.output)?;
    let crawler = Crawler::new(config.crawler)?;

    let pages = crawler
        .run_with_progress(|page| {
            // A closed channel only means nobody is watching
            let _ = tx.send(DashboardEvent::page(page));
        })
        .await;

    let reports = ReportBuilder::from_config(&pages, &config.output).save()?;
    Ok((pages.len(), reports))
}
