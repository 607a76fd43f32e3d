//! Display payloads handed to the rendering seams
//!
//! These types are the whole contract between the pipeline and the
//! rendering sink: the sink turns them into markup, this crate never
//! reads anything back.

use chrono::{DateTime, Utc};

/// One scalar metric card
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

/// One row of the recent-clicks table
#[derive(Debug, Clone, PartialEq)]
pub struct RecentRow {
    /// "City, Country" with unknown labels substituted
    pub location: String,
    pub ip: String,
    /// UTC timestamp, already formatted for display
    pub timestamp: String,
}

/// Rendering style requested from the chart collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Time-series handoff for the chart collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRequest {
    /// No date buckets exist; the chart area shows a "no data" state and
    /// the chart collaborator is not invoked.
    NoData,
    Draw {
        kind: ChartKind,
        labels: Vec<String>,
        values: Vec<u64>,
    },
}

/// Full analytics dashboard payload for one short link
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub short_link: String,
    pub updated_at: DateTime<Utc>,
    /// Total clicks, unique countries, unique cities, average clicks/day
    pub cards: Vec<MetricCard>,
    /// Up to five entries; empty means the sink renders its no-data fallback
    pub top_countries: Vec<(String, u64)>,
    pub top_cities: Vec<(String, u64)>,
    /// Up to twenty rows, newest first; empty means "no clicks yet"
    pub recent_clicks: Vec<RecentRow>,
    pub chart: ChartRequest,
}

/// Success banner payload for the shorten flow
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenView {
    pub short_link: String,
    pub original_url: String,
}

/// Error banner variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorView {
    /// The short link does not exist (HTTP 404)
    NotFound,
    /// The service answered without data (`success: false` or absent `data`)
    NoData,
    /// Transport failure, unexpected status, or an unparseable body
    Generic,
}
