//! Events pushed to dashboard subscribers
//!
//! A stream carries any number of page events followed by exactly one
//! terminal event, either `complete` or `error`.

use crate::crawler::PageRecord;
use crate::output::ReportPaths;
use axum::response::sse::Event;
use serde::Serialize;

/// The subset of a page record shown in the live table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub url: String,
    pub status_code: u16,
    pub title: String,
    pub depth: u32,
}

impl From<&PageRecord> for PageSummary {
    fn from(page: &PageRecord) -> Self {
        Self {
            url: page.url.clone(),
            status_code: page.status_code,
            title: page.title.clone(),
            depth: page.depth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletePayload {
    pub pages: usize,
    pub reports: ReportPaths,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub message: String,
}

/// One message of the live progress protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// A page finished crawling (sent as an unnamed event)
    Page(PageSummary),

    /// The run finished and reports were saved
    Complete(CompletePayload),

    /// The run failed before completing
    Error(ErrorPayload),
}

impl DashboardEvent {
    pub fn page(page: &PageRecord) -> Self {
        Self::Page(PageSummary::from(page))
    }

    pub fn complete(pages: usize, reports: ReportPaths) -> Self {
        Self::Complete(CompletePayload { pages, reports })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorPayload {
            message: message.into(),
        })
    }

    /// SSE event name; page events are unnamed
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Page(_) => None,
            Self::Complete(_) => Some("complete"),
            Self::Error(_) => Some("error"),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Page(_))
    }

    /// JSON payload of the event
    pub fn data(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Page(summary) => serde_json::to_string(summary),
            Self::Complete(payload) => serde_json::to_string(payload),
            Self::Error(payload) => serde_json::to_string(payload),
        }
    }

    /// Converts the event into an SSE frame
    pub fn to_sse(&self) -> Event {
        let data = match self.data() {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to encode dashboard event: {}", e);
                return Event::default()
                    .event("error")
                    .data(serde_json::json!({ "message": e.to_string() }).to_string());
            }
        };

        match self.name() {
            Some(name) => Event::default().event(name).data(data),
            None => Event::default().data(data),
        }
    }
}
