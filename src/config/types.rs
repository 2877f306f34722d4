use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "seedcrawl/0.1";

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Parameters for one crawl run
///
/// A run reads these once; nothing mutates them while the frontier drains.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CrawlConfig {
    /// URL the crawl starts from
    pub start_url: String,

    /// Maximum number of pages to record
    pub max_pages: usize,

    /// Maximum BFS distance from the seed (0 = seed only)
    pub max_depth: u32,

    /// Only follow links whose host matches the seed's host
    pub same_domain_only: bool,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header value
    pub user_agent: String,

    /// Collect `<img src>` values
    pub include_images: bool,

    /// Collect `<a href>` values and follow them
    pub extract_links: bool,

    /// Reserved; robots.txt is not consulted
    pub respect_robots_txt: bool,
}

impl CrawlConfig {
    /// Creates a configuration with default limits for the given seed
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            ..Self::default()
        }
    }

    /// Returns the fetch timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            start_url: String::new(),
            max_pages: 20,
            max_depth: 2,
            same_domain_only: true,
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            include_images: true,
            extract_links: true,
            respect_robots_txt: false,
        }
    }
}

/// Where report artifacts are written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    /// Directory that receives the report files
    pub output_dir: PathBuf,

    /// Base file name shared by the CSV, JSON and Markdown reports
    pub report_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            report_name: "crawl-report".to_string(),
        }
    }
}
