//! Statistics computed over crawl results
//!
//! This module derives the summary numbers shown in the Markdown report and
//! printed by the CLI: page count, status histogram, depth histogram and
//! the most frequent words in the text excerpts.

use crate::crawler::PageRecord;
use std::collections::{BTreeMap, HashMap};

/// Number of words listed in the top-words table
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStatistics {
    /// Total number of recorded pages
    pub total_pages: usize,

    /// Count of pages per status code, ascending by code
    pub status_histogram: BTreeMap<u16, usize>,

    /// Count of pages per BFS depth
    pub depth_histogram: BTreeMap<u32, usize>,

    /// Most frequent words, highest count first
    pub top_words: Vec<(String, usize)>,

    /// Pages that got no HTTP response
    pub transport_failures: usize,
}

/// Computes statistics for a list of pages
///
/// # Arguments
///
/// * `pages` - Pages in crawl order
/// * `top_n` - How many words to keep in the top-words list
pub fn compute_statistics(pages: &[PageRecord], top_n: usize) -> ReportStatistics {
    let mut depth_histogram = BTreeMap::new();
    for page in pages {
        *depth_histogram.entry(page.depth).or_insert(0) += 1;
    }

    ReportStatistics {
        total_pages: pages.len(),
        status_histogram: status_histogram(pages),
        depth_histogram,
        top_words: top_words(pages, top_n),
        transport_failures: pages.iter().filter(|p| p.is_transport_failure()).count(),
    }
}

/// Counts pages per status code
pub fn status_histogram(pages: &[PageRecord]) -> BTreeMap<u16, usize> {
    let mut histogram = BTreeMap::new();
    for page in pages {
        *histogram.entry(page.status_code).or_insert(0) += 1;
    }
    histogram
}

/// Finds the most frequent words across all text excerpts
///
/// Tokens are whitespace-separated; only purely alphabetic tokens longer
/// than three characters count, compared case-insensitively. Equal counts
/// keep the order in which the words first appeared.
pub fn top_words(pages: &[PageRecord], limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let tokens = pages
        .iter()
        .flat_map(|page| page.text_preview.split_whitespace())
        .filter(|token| is_countable_word(token));

    for token in tokens {
        let word = token.to_lowercase();
        match positions.get(&word) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

fn is_countable_word(token: &str) -> bool {
    token.chars().all(char::is_alphabetic) && token.chars().count() > 3
}

/// Prints crawl statistics to stdout
pub fn print_statistics(stats: &ReportStatistics) {
    println!("=== Crawl Statistics ===\n");
    println!("Total pages: {}", stats.total_pages);
    println!("Transport failures: {}", stats.transport_failures);

    if !stats.status_histogram.is_empty() {
        println!("\nStatus codes:");
        for (code, count) in &stats.status_histogram {
            println!("  {}: {}", code, count);
        }
    }

    if !stats.depth_histogram.is_empty() {
        println!("\nPages by depth:");
        for (depth, count) in &stats.depth_histogram {
            println!("  {}: {}", depth, count);
        }
    }

    if !stats.top_words.is_empty() {
        println!("\nTop words:");
        for (word, count) in stats.top_words.iter().take(10) {
            println!("  {:<20} {}", word, count);
        }
    }
}
