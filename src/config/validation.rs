use crate::config::types::{Config, CrawlConfig, OutputConfig};
use crate::url::parse_seed_url;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl parameters and returns the parsed seed URL
///
/// This runs before any fetch so a bad seed never reaches the network.
pub fn validate_crawl_config(config: &CrawlConfig) -> Result<Url, ConfigError> {
    let seed = parse_seed_url(&config.start_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", config.start_url, e)))?;

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(seed)
}

/// Validates output configuration
pub fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    if config.report_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "report_name cannot be empty".to_string(),
        ));
    }

    if config.report_name.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "report_name must not contain path separators, got '{}'",
            config.report_name
        )));
    }

    Ok(())
}
