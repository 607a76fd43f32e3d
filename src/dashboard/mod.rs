//! Analytics dashboard pipeline
//!
//! `presenter` shapes aggregates into display payloads, `service` drives
//! fetch -> aggregate -> present -> render, `views` holds the payload types
//! shared with the rendering seams.

pub mod presenter;
pub mod service;
pub mod views;

pub use presenter::{present, TOP_DISPLAYED};
pub use service::{DashboardService, Page, ViewState};
pub use views::{
    ChartKind, ChartRequest, DashboardView, ErrorView, MetricCard, RecentRow, ShortenView,
};
