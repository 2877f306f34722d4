//! Markdown summary generation
//!
//! This module renders the human-readable crawl report: page count, status
//! code histogram, top words, and the links discovered on each page.

use crate::crawler::PageRecord;
use crate::output::stats::ReportStatistics;

/// Links listed per page in the "Links Discovered" section
pub const LINKS_PER_PAGE: usize = 20;

/// Formats a crawl report as markdown
///
/// # Arguments
///
/// * `pages` - Pages in crawl order
/// * `stats` - Statistics computed over the same pages
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(pages: &[PageRecord], stats: &ReportStatistics) -> String {
    let mut md = String::new();

    md.push_str("# Crawl Report\n\n");
    md.push_str(&format!("Total pages crawled: {}\n\n", stats.total_pages));

    // Status codes
    md.push_str("## Status Codes\n\n");
    for (code, count) in &stats.status_histogram {
        md.push_str(&format!("- {}: {}\n", code, count));
    }
    md.push('\n');

    // Top words
    md.push_str("## Top Words\n\n");
    md.push_str("| Word | Count |\n");
    md.push_str("| --- | --- |\n");
    for (word, count) in &stats.top_words {
        md.push_str(&format!("| {} | {} |\n", word, count));
    }
    md.push('\n');

    // Links per page
    md.push_str("## Links Discovered\n");
    for page in pages.iter().filter(|p| !p.links.is_empty()) {
        md.push_str(&format!("\n### {}\n\n", page.url));
        for link in page.links.iter().take(LINKS_PER_PAGE) {
            md.push_str(&format!("- {}\n", link));
        }
    }

    md
}
