//! Wire models for the shortener and analytics services

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope wrapping every API payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    #[serde(default = "default_success")]
    pub success: bool,

    /// The data returned by the request, absent on failure
    #[serde(default)]
    pub data: Option<T>,
}

// The services omit `success` only in legacy responses, where it meant true.
fn default_success() -> bool {
    true
}

/// A single observed visit to a shortened link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Country label resolved by the service, may be empty
    pub country: String,

    /// City label resolved by the service, may be empty
    pub city: String,

    /// Client IP, display-only
    pub ip: String,

    /// When the click occurred
    pub created_at: DateTime<Utc>,
}

/// Click history for one short link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAnalytics {
    /// The short code this history belongs to
    pub short_link: String,

    /// Clicks in arrival order, oldest first
    pub clicks: Vec<ClickEvent>,

    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
}

/// Result of shortening a URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortenedUrl {
    /// The original URL
    pub link: String,

    /// The generated short code
    pub short_link: String,

    /// When the URL was shortened
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_analytics_payload() {
        let body = r#"{
            "success": true,
            "data": {
                "short_link": "abc12345",
                "updated_at": "2026-03-01T12:00:00Z",
                "clicks": [
                    {
                        "country": "US",
                        "city": "NYC",
                        "ip": "203.0.113.7",
                        "created_at": "2026-03-01T11:59:00Z"
                    }
                ]
            }
        }"#;

        let envelope: ApiResponse<LinkAnalytics> = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        let analytics = envelope.data.unwrap();
        assert_eq!(analytics.short_link, "abc12345");
        assert_eq!(analytics.clicks.len(), 1);
        assert_eq!(analytics.clicks[0].country, "US");
    }

    #[test]
    fn envelope_defaults_to_success_with_no_data() {
        let envelope: ApiResponse<LinkAnalytics> = serde_json::from_str("{}").unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_parses_failure() {
        let envelope: ApiResponse<LinkAnalytics> =
            serde_json::from_str(r#"{"success": false, "data": null}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }
}
