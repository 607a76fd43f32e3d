//! Dashboard controller
//!
//! Drives the fetch -> aggregate -> present -> render pipeline and owns the
//! view state. Every successful load replaces the whole previous view; there
//! is no partial re-render. Overlapping loads are resolved with a monotonic
//! fetch token so a slow, stale response can never overwrite a newer render.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::analytics::aggregate;
use crate::api::{normalize_short_link, AnalyticsApi, ApiError};
use crate::dashboard::presenter::present;
use crate::dashboard::views::{ChartRequest, ErrorView, ShortenView};
use crate::render::{ChartRenderer, RenderSink};

/// Which panel of the application is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Shortener,
    Analytics,
}

/// Explicit view state, passed around instead of ambient globals
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub active_page: Page,
    /// The short link whose dashboard is currently shown, if any
    pub current_link: Option<String>,
}

/// Orchestrates the analytics dashboard and the shorten flow
pub struct DashboardService {
    api: Arc<dyn AnalyticsApi>,
    sink: Arc<dyn RenderSink>,
    chart: Arc<dyn ChartRenderer>,
    state: Mutex<ViewState>,
    fetch_seq: AtomicU64,
}

impl DashboardService {
    pub fn new(
        api: Arc<dyn AnalyticsApi>,
        sink: Arc<dyn RenderSink>,
        chart: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            api,
            sink,
            chart,
            state: Mutex::new(ViewState::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Show the analytics dashboard for user input, which may be a bare
    /// short code or a pasted full short URL.
    pub async fn show_analytics(&self, input: &str) {
        let short_link = normalize_short_link(input);
        if short_link.is_empty() {
            warn!("empty short link input");
            self.sink.render_error(ErrorView::Generic);
            return;
        }

        {
            let mut state = self.state.lock().await;
            state.active_page = Page::Analytics;
            state.current_link = Some(short_link.clone());
        }

        self.load(&short_link).await;
    }

    /// Re-issue the fetch for the currently shown short link and rebuild
    /// the entire view from the fresh response.
    pub async fn refresh(&self) {
        let current = self.state.lock().await.current_link.clone();
        match current {
            Some(short_link) => self.load(&short_link).await,
            None => warn!("refresh requested before any dashboard was shown"),
        }
    }

    /// Submit a URL to the shortener and render the outcome banner.
    pub async fn shorten(&self, url: &str) {
        {
            let mut state = self.state.lock().await;
            state.active_page = Page::Shortener;
        }

        match self.api.shorten(url).await {
            Ok(shortened) => {
                info!(short_link = %shortened.short_link, "URL shortened");
                self.sink.render_shorten_success(&ShortenView {
                    short_link: shortened.short_link,
                    original_url: shortened.link,
                });
            }
            Err(err) => {
                warn!(error = %err, "shorten request failed");
                self.sink.render_error(error_view(&err));
            }
        }
    }

    /// A read-only snapshot of the current view state.
    pub async fn view_state(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    async fn load(&self, short_link: &str) {
        let token = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.api.fetch_analytics(short_link).await;

        // A newer load has been issued while this one was in flight; the
        // newest request wins and this response is dropped.
        if self.fetch_seq.load(Ordering::SeqCst) != token {
            debug!(%short_link, "discarding stale analytics response");
            return;
        }

        match result {
            Ok(analytics) => {
                let agg = aggregate(&analytics);
                debug!(
                    %short_link,
                    total_clicks = agg.total_clicks,
                    "aggregated click history"
                );

                let view = present(&analytics.short_link, analytics.updated_at, &agg);
                self.sink.render_dashboard(&view);

                if let ChartRequest::Draw {
                    kind,
                    ref labels,
                    ref values,
                } = view.chart
                {
                    self.chart.draw(kind, labels, values);
                }
            }
            Err(err) => {
                warn!(%short_link, error = %err, "analytics fetch failed");
                self.sink.render_error(error_view(&err));
            }
        }
    }
}

/// Map an API failure onto the error banner variant the sink renders.
fn error_view(err: &ApiError) -> ErrorView {
    match err {
        ApiError::NotFound => ErrorView::NotFound,
        ApiError::EmptyPayload => ErrorView::NoData,
        ApiError::Status(_) | ApiError::Malformed(_) | ApiError::Transport(_) => ErrorView::Generic,
    }
}
