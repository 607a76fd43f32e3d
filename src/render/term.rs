//! Terminal renderer
//!
//! Concrete implementation of both rendering seams for the CLI: the
//! dashboard becomes aligned text sections, charts become bar rows or a
//! sparkline. Section builders are pure string functions so they can be
//! checked without capturing stdout.

use crate::dashboard::views::{ChartKind, ChartRequest, DashboardView, ErrorView, ShortenView};
use crate::render::{ChartRenderer, RenderSink};

const BAR_WIDTH: usize = 32;
const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders display payloads to stdout
#[derive(Debug, Default)]
pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl RenderSink for TermRenderer {
    fn render_dashboard(&self, view: &DashboardView) {
        print!("{}", dashboard_text(view));
    }

    fn render_shorten_success(&self, view: &ShortenView) {
        print!("{}", shorten_text(view));
    }

    fn render_error(&self, error: ErrorView) {
        print!("{}", error_text(error));
    }
}

impl ChartRenderer for TermRenderer {
    fn draw(&self, kind: ChartKind, labels: &[String], values: &[u64]) {
        print!("{}", chart_text(kind, labels, values));
    }
}

pub fn dashboard_text(view: &DashboardView) -> String {
    let mut out = String::new();

    let title = format!("Analytics for {}", view.short_link);
    out.push_str(&format!("\n{title}\n"));
    out.push_str(&format!("{}\n\n", "=".repeat(title.len())));

    for card in &view.cards {
        out.push_str(&format!("  {:<16} {}\n", card.label, card.value));
    }
    out.push('\n');

    out.push_str(&ranked_section("Top Countries", &view.top_countries));
    out.push_str(&ranked_section("Top Cities", &view.top_cities));

    out.push_str("Recent Clicks\n");
    if view.recent_clicks.is_empty() {
        out.push_str("  No clicks yet\n");
    } else {
        for row in &view.recent_clicks {
            out.push_str(&format!(
                "  {:<28} {:<18} {}\n",
                row.location, row.ip, row.timestamp
            ));
        }
    }
    out.push('\n');

    // The chart itself is drawn by the chart collaborator; only the empty
    // state belongs to the dashboard body.
    if view.chart == ChartRequest::NoData {
        out.push_str("Clicks by Day\n  No data available\n\n");
    }

    out.push_str(&format!(
        "Last updated: {}\n",
        view.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out
}

fn ranked_section(title: &str, entries: &[(String, u64)]) -> String {
    let mut out = format!("{title}\n");
    if entries.is_empty() {
        out.push_str("  No data available\n");
    } else {
        for (label, count) in entries {
            out.push_str(&format!("  {label:<24} {count}\n"));
        }
    }
    out.push('\n');
    out
}

pub fn shorten_text(view: &ShortenView) -> String {
    format!(
        "\nURL shortened successfully!\n  {} -> {}\n",
        view.original_url, view.short_link
    )
}

pub fn error_text(error: ErrorView) -> String {
    let message = match error {
        ErrorView::NotFound => {
            "URL not found: the shortened URL you entered was not found. \
             Please check the URL and try again."
        }
        ErrorView::NoData => "No analytics data is available for this link yet.",
        ErrorView::Generic => "An error occurred. Please try again.",
    };
    format!("\n{message}\n")
}

pub fn chart_text(kind: ChartKind, labels: &[String], values: &[u64]) -> String {
    let mut out = String::from("Clicks by Day\n");
    let max = values.iter().copied().max().unwrap_or(0).max(1);

    match kind {
        ChartKind::Bar => {
            for (label, value) in labels.iter().zip(values) {
                let width = (*value as usize * BAR_WIDTH) / max as usize;
                out.push_str(&format!("  {:<12} {} {}\n", label, "█".repeat(width), value));
            }
        }
        ChartKind::Line => {
            let spark: String = values
                .iter()
                .map(|v| SPARK_GLYPHS[((v * 7) / max) as usize])
                .collect();
            out.push_str(&format!("  {spark}\n"));
            if let (Some(first), Some(last)) = (labels.first(), labels.last()) {
                out.push_str(&format!("  {first} .. {last}\n"));
            }
        }
    }
    out.push('\n');
    out
}
