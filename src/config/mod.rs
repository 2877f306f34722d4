//! Configuration module for seedcrawl
//!
//! This module holds the crawl and output settings, loads them from TOML
//! files, and validates them before a run starts.
//!
//! # Example
//!
//! ```no_run
//! use seedcrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seedcrawl.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, OutputConfig, DEFAULT_USER_AGENT};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_crawl_config, validate_output_config};
