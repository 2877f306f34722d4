//! Tabular (CSV) report
//!
//! One row per page. Link and image lists are stored as JSON arrays of
//! strings so their order survives the round trip.

use crate::crawler::PageRecord;
use crate::output::ReportError;
use chrono::SecondsFormat;

/// Column order of the CSV report
pub const CSV_HEADER: [&str; 8] = [
    "url",
    "status_code",
    "title",
    "text_preview",
    "links",
    "images",
    "fetched_at",
    "depth",
];

/// Renders pages as CSV bytes
pub fn render_csv(pages: &[PageRecord]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for page in pages {
        let status_code = page.status_code.to_string();
        let links = serde_json::to_string(&page.links)?;
        let images = serde_json::to_string(&page.images)?;
        let fetched_at = page.fetched_at.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let depth = page.depth.to_string();

        writer.write_record([
            page.url.as_str(),
            status_code.as_str(),
            page.title.as_str(),
            page.text_preview.as_str(),
            links.as_str(),
            images.as_str(),
            fetched_at.as_str(),
            depth.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))
}
