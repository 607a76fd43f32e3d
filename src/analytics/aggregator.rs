//! Click aggregation
//!
//! Derives a [`ClickAggregate`] from the raw click history of one short
//! link: totals, top-N geography breakdowns, a daily time series, an hourly
//! histogram, and a recency window. Aggregation is a pure pass over the
//! input; the aggregate is rebuilt from scratch on every fetch.
//!
//! Date and hour buckets use UTC, matching the timestamps the services emit.

use chrono::Timelike;
use std::collections::BTreeMap;

use crate::api::models::{ClickEvent, LinkAnalytics};

/// How many recent clicks the aggregate retains, newest first
pub const RECENT_CLICKS_LIMIT: usize = 20;

/// How many top entries per geography dimension the aggregate retains
pub const TOP_RETAINED: usize = 10;

/// Bucket label for clicks with an empty or missing geo label
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Derived summary of one short link's click history
#[derive(Debug, Clone, Default)]
pub struct ClickAggregate {
    /// Total number of clicks
    pub total_clicks: u64,

    /// Country label -> count, in first-seen order
    pub country_counts: Vec<(String, u64)>,

    /// City label -> count, in first-seen order
    pub city_counts: Vec<(String, u64)>,

    /// Country entries by descending count, ties in first-seen order
    pub top_countries: Vec<(String, u64)>,

    /// City entries by descending count, ties in first-seen order
    pub top_cities: Vec<(String, u64)>,

    /// UTC calendar date (`YYYY-MM-DD`) -> count, ascending by date
    pub clicks_by_date: Vec<(String, u64)>,

    /// Counts by UTC hour of day. Not rendered anywhere yet; kept on the
    /// aggregate so a consumer can pick it up without another pass.
    pub clicks_by_hour: [u64; 24],

    /// Last [`RECENT_CLICKS_LIMIT`] clicks, newest first
    pub recent_clicks: Vec<ClickEvent>,

    /// Average clicks per distinct date bucket, rounded to one decimal
    pub avg_clicks_per_day: f64,
}

/// Aggregate the click history of one short link.
pub fn aggregate(analytics: &LinkAnalytics) -> ClickAggregate {
    let clicks = &analytics.clicks;
    let total_clicks = clicks.len() as u64;

    let mut country_counts: Vec<(String, u64)> = Vec::new();
    let mut city_counts: Vec<(String, u64)> = Vec::new();
    let mut by_date: BTreeMap<String, u64> = BTreeMap::new();
    let mut clicks_by_hour = [0u64; 24];

    // One forward pass accumulates every dimension; the accumulations are
    // independent and all keyed off the same record.
    for click in clicks {
        bump(&mut country_counts, bucket_label(&click.country));
        bump(&mut city_counts, bucket_label(&click.city));

        let date_key = click.created_at.format("%Y-%m-%d").to_string();
        *by_date.entry(date_key).or_insert(0) += 1;

        clicks_by_hour[click.created_at.hour() as usize] += 1;
    }

    let top_countries = top_entries(&country_counts);
    let top_cities = top_entries(&city_counts);

    let avg_clicks_per_day = if total_clicks == 0 {
        0.0
    } else {
        let days = by_date.len().max(1) as f64;
        round_to_tenth(total_clicks as f64 / days)
    };

    let start = clicks.len().saturating_sub(RECENT_CLICKS_LIMIT);
    let mut recent_clicks = clicks[start..].to_vec();
    recent_clicks.reverse();

    ClickAggregate {
        total_clicks,
        country_counts,
        city_counts,
        top_countries,
        top_cities,
        // BTreeMap iteration is ascending by key; for YYYY-MM-DD keys the
        // lexicographic order is the chronological order.
        clicks_by_date: by_date.into_iter().collect(),
        clicks_by_hour,
        recent_clicks,
        avg_clicks_per_day,
    }
}

/// Collapse empty geo labels into the shared unknown bucket.
fn bucket_label(label: &str) -> &str {
    if label.trim().is_empty() {
        UNKNOWN_LABEL
    } else {
        label
    }
}

fn bump(counts: &mut Vec<(String, u64)>, label: &str) {
    if let Some(entry) = counts.iter_mut().find(|(seen, _)| seen == label) {
        entry.1 += 1;
    } else {
        counts.push((label.to_string(), 1));
    }
}

/// Order entries by descending count. The input is in first-seen order and
/// the sort is stable, so equal counts keep their first-seen positions.
fn top_entries(counts: &[(String, u64)]) -> Vec<(String, u64)> {
    let mut entries = counts.to_vec();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(TOP_RETAINED);
    entries
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
