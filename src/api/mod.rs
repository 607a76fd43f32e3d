//! Client for the shortener and analytics HTTP services

pub mod client;
pub mod models;

pub use client::{normalize_short_link, AnalyticsApi, ApiError, ApiResult, HttpApiClient};
pub use models::{ApiResponse, ClickEvent, LinkAnalytics, ShortenedUrl};
