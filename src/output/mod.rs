//! Output module for generating crawl reports
//!
//! This module handles:
//! - Writing the CSV, JSON and Markdown report files for a run
//! - Computing and printing crawl statistics
//!
//! Reports are pure functions of the page list; rendering the same pages
//! twice gives identical bytes.

mod csv_output;
mod json_output;
mod markdown;
pub mod stats;

pub use csv_output::{render_csv, CSV_HEADER};
pub use json_output::render_json;
pub use markdown::{format_markdown_report, LINKS_PER_PAGE};
pub use stats::{compute_statistics, print_statistics, ReportStatistics, DEFAULT_TOP_WORDS};

use crate::config::OutputConfig;
use crate::crawler::PageRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing reports
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Locations of the three report files of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub markdown: PathBuf,
}

impl ReportPaths {
    /// Builds the paths `<dir>/<name>.csv`, `.json` and `.md`
    pub fn new(output_dir: &Path, report_name: &str) -> Self {
        Self {
            csv: output_dir.join(format!("{}.csv", report_name)),
            json: output_dir.join(format!("{}.json", report_name)),
            markdown: output_dir.join(format!("{}.md", report_name)),
        }
    }

    /// Returns `(kind, path)` pairs in a fixed order
    pub fn entries(&self) -> [(&'static str, &Path); 3] {
        [
            ("csv", self.csv.as_path()),
            ("json", self.json.as_path()),
            ("markdown", self.markdown.as_path()),
        ]
    }
}

/// Renders and saves the reports for a list of pages
///
/// # Example
///
/// ```no_run
/// use seedcrawl::output::ReportBuilder;
///
/// # fn example(pages: &[seedcrawl::PageRecord]) -> Result<(), seedcrawl::output::ReportError> {
/// let paths = ReportBuilder::new(pages, "outputs", "crawl-report").save()?;
/// println!("{}", paths.markdown.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder<'a> {
    pages: &'a [PageRecord],
    output_dir: PathBuf,
    report_name: String,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(
        pages: &'a [PageRecord],
        output_dir: impl Into<PathBuf>,
        report_name: impl Into<String>,
    ) -> Self {
        Self {
            pages,
            output_dir: output_dir.into(),
            report_name: report_name.into(),
        }
    }

    /// Creates a builder targeting the configured directory and name
    pub fn from_config(pages: &'a [PageRecord], config: &OutputConfig) -> Self {
        Self::new(pages, config.output_dir.clone(), config.report_name.clone())
    }

    pub fn paths(&self) -> ReportPaths {
        ReportPaths::new(&self.output_dir, &self.report_name)
    }

    pub fn statistics(&self) -> ReportStatistics {
        compute_statistics(self.pages, DEFAULT_TOP_WORDS)
    }

    pub fn csv(&self) -> ReportResult<Vec<u8>> {
        render_csv(self.pages)
    }

    pub fn json(&self) -> ReportResult<String> {
        render_json(self.pages)
    }

    pub fn markdown(&self) -> String {
        format_markdown_report(self.pages, &self.statistics())
    }

    /// Writes all three reports, creating the output directory if needed
    ///
    /// # Returns
    ///
    /// * `Ok(ReportPaths)` - Every file was written
    /// * `Err(ReportError)` - The directory or a file could not be written
    pub fn save(&self) -> ReportResult<ReportPaths> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let paths = self.paths();
        write_file(&paths.csv, &self.csv()?)?;
        write_file(&paths.json, self.json()?.as_bytes())?;
        write_file(&paths.markdown, self.markdown().as_bytes())?;

        tracing::info!(
            "Wrote {} page(s) to {} reports in {}",
            self.pages.len(),
            self.report_name,
            self.output_dir.display()
        );

        Ok(paths)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> ReportResult<()> {
    std::fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
