//! Seedcrawl: a bounded breadth-first site crawler
//!
//! This crate crawls a website outward from a single seed URL, records
//! title, text excerpt, links and images for every visited page, and
//! renders CSV, JSON and Markdown reports. Pages are reported to an
//! observer as soon as they are crawled, which the dashboard relays over
//! server-sent events.

pub mod config;
pub mod crawler;
pub mod dashboard;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for run-level failures
///
/// Page-level failures (unreachable hosts, malformed markup) never show up
/// here; they are absorbed into [`crawler::PageRecord`] fields.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Report error: {0}")]
    Report(#[from] output::ReportError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid start URL: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for seedcrawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, CrawlConfig, OutputConfig};
pub use crawler::{Crawler, PageRecord};
pub use output::{ReportBuilder, ReportPaths};
