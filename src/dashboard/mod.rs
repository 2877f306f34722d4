//! Web dashboard for watching crawls live
//!
//! The dashboard starts crawls on background tasks and relays each page,
//! then one terminal `complete` or `error` event, to the browser over
//! server-sent events.

mod events;
mod relay;
mod server;

pub use events::{CompletePayload, DashboardEvent, ErrorPayload, PageSummary};
pub use relay::{spawn_crawl, CrawlParams};
pub use server::{resolve_report_path, router, serve, DashboardState};
