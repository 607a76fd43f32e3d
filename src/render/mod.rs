//! Rendering seams
//!
//! The dashboard pipeline only produces display payloads; turning them into
//! visible output is the job of these collaborators. The pipeline writes
//! through them and never reads anything back.

pub mod term;

use crate::dashboard::views::{ChartKind, DashboardView, ErrorView, ShortenView};

pub use term::TermRenderer;

/// Sink that turns display payloads into visible markup
pub trait RenderSink: Send + Sync {
    /// Replace the analytics area with a full dashboard
    fn render_dashboard(&self, view: &DashboardView);

    /// Show the success banner for a freshly shortened URL
    fn render_shorten_success(&self, view: &ShortenView);

    /// Show an error banner
    fn render_error(&self, error: ErrorView);
}

/// Collaborator that draws an axis-aligned chart from a labeled series
pub trait ChartRenderer: Send + Sync {
    fn draw(&self, kind: ChartKind, labels: &[String], values: &[u64]);
}
