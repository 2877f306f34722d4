//! HTTP routes of the dashboard
//!
//! - `GET /` serves the single-page dashboard
//! - `GET /crawl` starts a crawl and streams its events as SSE
//! - `GET /reports?path=...` serves a report file from under the base directory

use crate::dashboard::relay::{spawn_crawl, CrawlParams};
use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::StreamExt;

const DASHBOARD_PAGE: &str = include_str!("page.html");

/// Shared state of the dashboard routes
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Report downloads are limited to files under this directory
    pub base_dir: PathBuf,
}

impl DashboardState {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// State rooted at the process working directory
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

#[derive(Debug, Deserialize)]
struct ReportQuery {
    path: Option<String>,
}

/// Builds the dashboard router
pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/crawl", get(crawl_stream))
        .route("/reports", get(serve_report))
        .with_state(state)
}

/// Binds the dashboard to `addr` and serves until the process exits
pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let state = DashboardState::from_current_dir().context("failed to read working directory")?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, app).await.context("server shutdown")?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

async fn crawl_stream(Query(params): Query<CrawlParams>) -> Response {
    let Some(url) = params.start_url() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Missing url" })),
        )
            .into_response();
    };
    tracing::info!("Dashboard crawl requested for {}", url);

    let events = spawn_crawl(params.to_config());
    let stream = UnboundedReceiverStream::new(events).map(|event| Ok::<Event, Infallible>(event.to_sse()));

    Sse::new(stream).keep_alive(KeepAlive::default()).into_response()
}

async fn serve_report(
    State(state): State<DashboardState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let Some(requested) = query.path else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(path) = resolve_report_path(&state.base_dir, &requested) else {
        tracing::debug!("Refusing report path {}", requested);
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read report {}: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Resolves a requested report path, or `None` if it escapes `base_dir`
///
/// Relative paths are taken relative to `base_dir`. The file must exist.
pub fn resolve_report_path(base_dir: &Path, requested: &str) -> Option<PathBuf> {
    let requested = Path::new(requested);
    let candidate = if requested.is_absolute() {
        requested.to_path_buf()
    } else {
        base_dir.join(requested)
    };

    let canonical = candidate.canonicalize().ok()?;
    let base = base_dir.canonicalize().ok()?;

    (canonical.starts_with(&base) && canonical.is_file()).then_some(canonical)
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => "text/csv; charset=utf-8",
        Some("json") => "application/json",
        Some("md") => "text/markdown; charset=utf-8",
        _ => "application/octet-stream",
    }
}
