//! Dashboard presentation
//!
//! Shapes a [`ClickAggregate`] into the [`DashboardView`] payload: four
//! metric cards, two ranked lists, the recency table, and the chart
//! handoff. Pure; rendering happens behind the seams in `render`.

use chrono::{DateTime, Utc};

use crate::analytics::{ClickAggregate, UNKNOWN_LABEL};
use crate::api::models::ClickEvent;
use crate::dashboard::views::{ChartKind, ChartRequest, DashboardView, MetricCard, RecentRow};

/// How many top entries per ranked list the dashboard displays
pub const TOP_DISPLAYED: usize = 5;

/// Build the display payload for one short link's aggregate.
pub fn present(short_link: &str, updated_at: DateTime<Utc>, agg: &ClickAggregate) -> DashboardView {
    let cards = vec![
        MetricCard {
            label: "Total Clicks".to_string(),
            value: agg.total_clicks.to_string(),
        },
        MetricCard {
            label: "Countries".to_string(),
            value: agg.country_counts.len().to_string(),
        },
        MetricCard {
            label: "Cities".to_string(),
            value: agg.city_counts.len().to_string(),
        },
        MetricCard {
            label: "Avg Clicks/Day".to_string(),
            value: format!("{:.1}", agg.avg_clicks_per_day),
        },
    ];

    DashboardView {
        short_link: short_link.to_string(),
        updated_at,
        cards,
        top_countries: displayed(&agg.top_countries),
        top_cities: displayed(&agg.top_cities),
        recent_clicks: agg.recent_clicks.iter().map(recent_row).collect(),
        chart: chart_request(&agg.clicks_by_date),
    }
}

/// Pick the chart rendering for the daily series.
///
/// A line through a single point renders misleadingly, so one bucket asks
/// for a single-category bar instead; zero buckets skip the collaborator
/// entirely.
fn chart_request(clicks_by_date: &[(String, u64)]) -> ChartRequest {
    let kind = match clicks_by_date.len() {
        0 => return ChartRequest::NoData,
        1 => ChartKind::Bar,
        _ => ChartKind::Line,
    };

    let (labels, values) = clicks_by_date.iter().cloned().unzip();
    ChartRequest::Draw {
        kind,
        labels,
        values,
    }
}

fn displayed(top: &[(String, u64)]) -> Vec<(String, u64)> {
    top.iter().take(TOP_DISPLAYED).cloned().collect()
}

fn recent_row(click: &ClickEvent) -> RecentRow {
    RecentRow {
        location: format!(
            "{}, {}",
            display_label(&click.city),
            display_label(&click.country)
        ),
        ip: click.ip.clone(),
        timestamp: click.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

fn display_label(label: &str) -> &str {
    if label.trim().is_empty() {
        UNKNOWN_LABEL
    } else {
        label
    }
}
