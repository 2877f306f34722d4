//! Per-page crawl results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status code recorded when no HTTP response was received
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// Result of one fetch + parse attempt for one URL
///
/// Built once by the crawler right after the attempt completes and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The requested URL (not a redirect target)
    pub url: String,

    /// HTTP status code, or 0 when the request failed in transport
    pub status_code: u16,

    /// Page title, empty when missing
    pub title: String,

    /// Whitespace-normalized, length-bounded text excerpt
    pub text_preview: String,

    /// Raw `href` values in document order
    pub links: Vec<String>,

    /// Raw `src` values in document order
    pub images: Vec<String>,

    /// BFS distance from the seed
    pub depth: u32,

    /// When the fetch attempt completed
    pub fetched_at: DateTime<Utc>,
}

impl PageRecord {
    /// Returns true if the fetch never produced an HTTP response
    pub fn is_transport_failure(&self) -> bool {
        self.status_code == TRANSPORT_FAILURE_STATUS
    }
}
