//! Structured (JSON) report: the full page records, pretty-printed

use crate::crawler::PageRecord;
use crate::output::ReportError;

/// Renders pages as a pretty-printed JSON array
pub fn render_json(pages: &[PageRecord]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(pages)?)
}
